//! Per-user statistics handlers

use axum::{extract::State, Json};
use jokebox_service::dto::{
    MostCommonEmojiResponse, RecentVotesQuery, VoteCountResponse, VotedJokeResponse,
};
use jokebox_service::StatsService;

use crate::extractors::{AuthUser, QueryParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/user/voted-jokes
pub async fn voted_jokes(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<VotedJokeResponse>>> {
    let jokes = StatsService::new(state.service_context())
        .voted_jokes(auth.user_id)
        .await?;
    Ok(Json(jokes))
}

/// GET /api/user/common-emoji
pub async fn common_emoji(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MostCommonEmojiResponse>> {
    let response = StatsService::new(state.service_context())
        .most_common_reaction(auth.user_id)
        .await?;
    Ok(Json(response))
}

/// GET /api/user/vote-count-24h?hours=N
pub async fn vote_count(
    State(state): State<AppState>,
    auth: AuthUser,
    QueryParams(query): QueryParams<RecentVotesQuery>,
) -> ApiResult<Json<VoteCountResponse>> {
    let response = StatsService::new(state.service_context())
        .recent_vote_count(auth.user_id, query.hours)
        .await?;
    Ok(Json(response))
}
