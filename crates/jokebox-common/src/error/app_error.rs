//! Application error types
//!
//! Unified error handling for the entire application.

use jokebox_core::DomainError;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Unauthorized - No token provided")]
    MissingAuth,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials | Self::InvalidToken | Self::TokenExpired | Self::MissingAuth => 401,

            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,

            Self::Domain(e) => domain_status(e),
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::MissingAuth => "MISSING_AUTH",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }
}

/// HTTP status for a domain error
#[must_use]
pub fn domain_status(err: &DomainError) -> u16 {
    if err.is_not_found() {
        404
    } else if err.is_validation() {
        400
    } else if err.is_conflict() {
        409
    } else {
        500
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jokebox_core::{JokeId, UserId};

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidCredentials.status_code(), 401);
        assert_eq!(AppError::MissingAuth.status_code(), 401);
        assert_eq!(AppError::TokenExpired.status_code(), 401);
        assert_eq!(AppError::Database("test".to_string()).status_code(), 500);
        assert_eq!(AppError::Internal(anyhow::anyhow!("boom")).status_code(), 500);
    }

    #[test]
    fn test_domain_status_codes() {
        assert_eq!(AppError::from(DomainError::JokeNotFound(JokeId::generate())).status_code(), 404);
        assert_eq!(AppError::from(DomainError::UserNotFound(UserId::generate())).status_code(), 404);
        assert_eq!(AppError::from(DomainError::UnrecognizedReaction("X".into())).status_code(), 400);
        assert_eq!(AppError::from(DomainError::EmailAlreadyExists).status_code(), 409);
        assert_eq!(AppError::from(DomainError::UpstreamUnavailable("down".into())).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::InvalidCredentials.error_code(), "INVALID_CREDENTIALS");
        assert_eq!(AppError::Database("down".to_string()).error_code(), "DATABASE_ERROR");
        assert_eq!(
            AppError::from(DomainError::UnrecognizedReaction("X".into())).error_code(),
            "INVALID_EMOJI"
        );
    }

    #[test]
    fn test_internal_error_hides_source() {
        let err = AppError::Internal(anyhow::anyhow!("secret detail"));
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: AppError = ConfigError::MissingVar("JWT_SECRET").into();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("JWT_SECRET"));
    }
}
