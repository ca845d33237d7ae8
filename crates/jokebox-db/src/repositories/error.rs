//! Error handling utilities for repositories

use jokebox_core::error::DomainError;
use jokebox_core::value_objects::{JokeId, UserId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

pub fn user_not_found(id: UserId) -> DomainError {
    DomainError::UserNotFound(id)
}

pub fn joke_not_found(id: JokeId) -> DomainError {
    DomainError::JokeNotFound(id)
}
