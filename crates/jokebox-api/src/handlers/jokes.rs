//! Joke handlers

use axum::{extract::State, http::StatusCode, Json};
use jokebox_service::dto::{JokeResponse, VoteRequest, VoteResponse};
use jokebox_service::{JokeService, VoteService};

use crate::extractors::{AuthUser, JokeIdPath, JsonBody};
use crate::response::ApiResult;
use crate::state::AppState;

/// Fetch a random joke
///
/// GET /api/joke
///
/// 201 when the joke was stored for the first time, 200 otherwise.
pub async fn get_joke(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<(StatusCode, Json<JokeResponse>)> {
    let fetched = JokeService::new(state.service_context()).fetch_joke().await?;
    let status = if fetched.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(fetched.joke)))
}

/// Vote on a joke
///
/// POST /api/joke/:id/vote
pub async fn vote(
    State(state): State<AppState>,
    auth: AuthUser,
    JokeIdPath(joke_id): JokeIdPath,
    JsonBody(request): JsonBody<VoteRequest>,
) -> ApiResult<Json<VoteResponse>> {
    let response = VoteService::new(state.service_context())
        .submit_vote(auth.user_id, joke_id, &request.emoji)
        .await?;
    Ok(Json(response))
}
