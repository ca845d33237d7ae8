//! Route definitions
//!
//! API routes are mounted under /api; health probes sit at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, jokes, users};
use crate::state::AppState;

/// Create the API router (health routes are separate so they skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(joke_routes())
        .merge(user_routes())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/check", get(auth::check))
}

fn joke_routes() -> Router<AppState> {
    Router::new()
        .route("/joke", get(jokes::get_joke))
        .route("/joke/:id/vote", post(jokes::vote))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/voted-jokes", get(users::voted_jokes))
        .route("/user/common-emoji", get(users::common_emoji))
        .route("/user/vote-count-24h", get(users::vote_count))
}
