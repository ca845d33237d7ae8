//! Password hashing, verification and strength rules
//!
//! Uses Argon2id for hashing.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use jokebox_core::DomainError;

use crate::error::AppError;

/// Minimum password length in characters
pub const MIN_PASSWORD_LEN: usize = 8;

const WEAK_PASSWORD_MESSAGE: &str =
    "Password must be 8+ chars with at least one uppercase, one lowercase, and one number.";

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored hash
///
/// # Errors
/// Returns an error if the stored hash cannot be parsed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Check that a password has 8+ characters with an uppercase letter, a
/// lowercase letter and a digit
///
/// # Errors
/// Returns `DomainError::WeakPassword` when any rule fails
pub fn validate_password_strength(password: &str) -> Result<(), DomainError> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LEN;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_upper && has_lower && has_digit {
        Ok(())
    } else {
        Err(DomainError::WeakPassword(WEAK_PASSWORD_MESSAGE.to_string()))
    }
}
