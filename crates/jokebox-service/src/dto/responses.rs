//! Response DTOs for API endpoints
//!
//! Field names follow the JSON the web client already consumes
//! (`_id`, camelCase).

use chrono::{DateTime, Utc};
use jokebox_core::{Reaction, ReactionTally};
use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

/// Authenticated user with their active votes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub voted_jokes: Vec<VoteEntryResponse>,
}

/// One entry of a user's vote ledger
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteEntryResponse {
    pub joke_id: String,
    pub emoji: Reaction,
    pub voted_at: DateTime<Utc>,
}

/// Result of signing up or logging in
///
/// The token is handed to the transport layer and never serialized.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: UserResponse,
    pub access_token: String,
    pub expires_in: i64,
}

// ============================================================================
// Joke Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JokeResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub external_id: String,
    pub question: String,
    pub answer: String,
    pub votes: ReactionTally,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A fetched joke and whether it was stored for the first time
#[derive(Debug, Clone)]
pub struct FetchedJokeResponse {
    pub joke: JokeResponse,
    pub created: bool,
}

/// Vote confirmation
#[derive(Debug, Clone, Serialize)]
pub struct VoteResponse {
    pub message: String,
    pub joke: JokeResponse,
}

// ============================================================================
// Statistics Responses
// ============================================================================

/// A joke the user voted on, with the user's reaction
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VotedJokeResponse {
    pub joke_id: String,
    pub question: String,
    pub answer: String,
    pub user_vote: Reaction,
    pub voted_at: DateTime<Utc>,
    pub votes: ReactionTally,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MostCommonEmojiResponse {
    pub most_common_emoji: Option<Reaction>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteCountResponse {
    pub vote_count: usize,
}

/// Plain `{ "message": ... }` body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
