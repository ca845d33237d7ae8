//! Test fixtures and data generators
//!
//! Provides reusable request and response shapes for integration tests.

use serde::{Deserialize, Serialize};

/// Sign-up request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl SignUpRequest {
    /// A request with an email nobody has used yet
    pub fn unique() -> Self {
        Self {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: format!("test-{}@example.com", uuid::Uuid::new_v4().simple()),
            password: "TestPass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LogInRequest {
    pub email: String,
    pub password: String,
}

impl LogInRequest {
    pub fn from_sign_up(request: &SignUpRequest) -> Self {
        Self {
            email: request.email.clone(),
            password: request.password.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VoteRequest {
    pub emoji: String,
}

impl VoteRequest {
    pub fn new(emoji: &str) -> Self {
        Self {
            emoji: emoji.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub voted_jokes: Vec<VoteEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteEntry {
    pub joke_id: String,
    pub emoji: String,
    pub voted_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TallyEntry {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JokeResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub external_id: String,
    pub question: String,
    pub answer: String,
    pub votes: Vec<TallyEntry>,
}

impl JokeResponse {
    /// Counts in 😂 👍 ❤️ order
    pub fn counts(&self) -> Vec<u32> {
        self.votes.iter().map(|v| v.value).collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct VoteResponse {
    pub message: String,
    pub joke: JokeResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotedJoke {
    pub joke_id: String,
    pub question: String,
    pub answer: String,
    pub user_vote: String,
    pub voted_at: String,
    pub votes: Vec<TallyEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MostCommonEmoji {
    pub most_common_emoji: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteCount {
    pub vote_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
