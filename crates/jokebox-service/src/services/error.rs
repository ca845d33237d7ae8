//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use jokebox_common::{AppError, domain_status};
use jokebox_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation
    Domain(DomainError),

    /// Application error (auth, config, etc.)
    App(AppError),

    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            Self::Internal(_) => None,
        }
    }
}

impl ServiceError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status(e),
            Self::App(e) => e.status_code(),
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        // Unwrap so domain errors keep a single representation
        match err {
            AppError::Domain(e) => Self::Domain(e),
            other => Self::App(other),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use jokebox_core::JokeId;

    #[test]
    fn test_domain_error_mapping() {
        let err = ServiceError::from(DomainError::JokeNotFound(JokeId::generate()));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_JOKE");

        let err = ServiceError::from(DomainError::UnrecognizedReaction("X".into()));
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "Invalid emoji selection: X");

        let err = ServiceError::from(DomainError::UpstreamUnavailable("down".into()));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "UPSTREAM_ERROR");
    }

    #[test]
    fn test_app_domain_error_is_flattened() {
        let err = ServiceError::from(AppError::Domain(DomainError::EmailAlreadyExists));
        assert!(matches!(err, ServiceError::Domain(DomainError::EmailAlreadyExists)));
        assert_eq!(err.status_code(), 409);
    }

    #[test]
    fn test_app_error_passthrough() {
        let err = ServiceError::from(AppError::InvalidCredentials);
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.error_code(), "INVALID_CREDENTIALS");
    }

    #[test]
    fn test_internal_error() {
        let err = ServiceError::internal("user_repo is required");
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        assert!(err.to_string().contains("user_repo is required"));
    }
}
