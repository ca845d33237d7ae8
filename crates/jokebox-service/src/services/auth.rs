//! Authentication service
//!
//! Handles sign-up, login and resolving the current user.

use jokebox_common::AppError;
use jokebox_common::auth::{hash_password, validate_password_strength, verify_password};
use jokebox_core::{DomainError, User, UserId, VoteLedger};
use tracing::{info, instrument, warn};

use crate::dto::{AuthSession, LogInRequest, SignUpRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Emails are matched case-insensitively
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an account and sign the new user in
    ///
    /// Field presence and email format are checked by the request's
    /// `Validate` impl before this is called.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn sign_up(&self, request: SignUpRequest) -> ServiceResult<AuthSession> {
        validate_password_strength(&request.password)?;

        let email = normalize_email(&request.email);
        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;

        let user = User::new(
            request.first_name.trim().to_string(),
            request.last_name.trim().to_string(),
            email,
        );
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User signed up");

        self.session(&user, &VoteLedger::new())
    }

    /// Check credentials and sign the user in
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn log_in(&self, request: LogInRequest) -> ServiceResult<AuthSession> {
        validate_password_strength(&request.password)?;

        let email = normalize_email(&request.email);

        let user = self
            .ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                AppError::InvalidCredentials
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                AppError::InvalidCredentials
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        let ledger = self.ledger(user.id).await?;
        info!(user_id = %user.id, "User logged in");

        self.session(&user, &ledger)
    }

    /// The authenticated user with their active votes
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let ledger = self.ledger(user_id).await?;
        Ok(UserResponse::new(&user, &ledger))
    }

    async fn ledger(&self, user_id: UserId) -> ServiceResult<VoteLedger> {
        let records = self.ctx.vote_repo().find_by_user(user_id).await?;
        Ok(VoteLedger::from_records(records))
    }

    fn session(&self, user: &User, ledger: &VoteLedger) -> ServiceResult<AuthSession> {
        let token = self.ctx.jwt_service().issue(user.id)?;
        Ok(AuthSession {
            user: UserResponse::new(user, ledger),
            access_token: token.token,
            expires_in: token.expires_in,
        })
    }
}
