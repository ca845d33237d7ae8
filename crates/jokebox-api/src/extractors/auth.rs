//! Authentication extractor
//!
//! Reads the JWT from the `access_token` cookie, falling back to an
//! `Authorization: Bearer` header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use jokebox_common::AppError;
use jokebox_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Name of the cookie carrying the access token
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Authenticated user extracted from the access token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
}

impl AuthUser {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookie_token = CookieJar::from_headers(&parts.headers)
            .get(ACCESS_TOKEN_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|t| !t.is_empty());

        let token = match cookie_token {
            Some(token) => token,
            None => {
                let TypedHeader(Authorization(bearer)) =
                    TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                        .await
                        .map_err(|_| ApiError::App(AppError::MissingAuth))?;
                bearer.token().to_string()
            }
        };

        let app_state = AppState::from_ref(state);
        let user_id = app_state.jwt_service().authenticate(&token).map_err(|e| {
            tracing::warn!(error = %e, "Rejected access token");
            ApiError::App(e)
        })?;

        Ok(AuthUser::new(user_id))
    }
}
