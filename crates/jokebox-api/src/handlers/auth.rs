//! Authentication handlers
//!
//! Sign-up, login, logout and session check. The access token travels in
//! an HttpOnly cookie.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use jokebox_service::dto::{
    AuthSession, LogInRequest, MessageResponse, SignUpRequest, UserResponse,
};
use jokebox_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

fn session_cookie(state: &AppState, session: &AuthSession) -> Cookie<'static> {
    state
        .cookies()
        .issue(session.access_token.clone(), session.expires_in)
}

/// Create an account
///
/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<SignUpRequest>,
) -> ApiResult<(CookieJar, Created<Json<UserResponse>>)> {
    let session = AuthService::new(state.service_context())
        .sign_up(request)
        .await?;
    let jar = jar.add(session_cookie(&state, &session));
    Ok((jar, Created(Json(session.user))))
}

/// Log in with email and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LogInRequest>,
) -> ApiResult<(CookieJar, Json<UserResponse>)> {
    let session = AuthService::new(state.service_context())
        .log_in(request)
        .await?;
    let jar = jar.add(session_cookie(&state, &session));
    Ok((jar, Json(session.user)))
}

/// Clear the session cookie
///
/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    // Sent even when the request carried no cookie
    let jar = jar.add(state.cookies().expired());
    (jar, Json(MessageResponse::new("Logged out successfully")))
}

/// Current user with their votes
///
/// GET /api/auth/check
pub async fn check(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let user = AuthService::new(state.service_context())
        .current_user(auth.user_id)
        .await?;
    Ok(Json(user))
}
