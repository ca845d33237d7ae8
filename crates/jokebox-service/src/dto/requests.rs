//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Account creation request
///
/// Missing fields deserialize as empty strings so they surface as a
/// validation error instead of a body rejection.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct SignUpRequest {
    #[validate(length(min = 1, max = 100, message = "All fields are required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "All fields are required"))]
    pub last_name: String,

    #[validate(
        length(min = 1, message = "All fields are required"),
        email(message = "Invalid email format")
    )]
    pub email: String,

    #[validate(length(min = 1, max = 128, message = "All fields are required"))]
    pub password: String,
}

/// Login request
///
/// Email format is checked here and password strength in the auth service,
/// both before any account lookup.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LogInRequest {
    #[validate(
        length(min = 1, message = "All fields are required"),
        email(message = "Invalid email format")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "All fields are required"))]
    pub password: String,
}

impl LogInRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// ============================================================================
// Vote Requests
// ============================================================================

/// Vote request body: `{ "emoji": "😂" }`
///
/// The symbol is checked by the vote service so an unknown emoji is
/// reported as `INVALID_EMOJI` rather than a generic validation failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VoteRequest {
    pub emoji: String,
}

// ============================================================================
// Query Parameters
// ============================================================================

/// `?hours=N` on the recent vote count endpoint
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RecentVotesQuery {
    pub hours: Option<u32>,
}
