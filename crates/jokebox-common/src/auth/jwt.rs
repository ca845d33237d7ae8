//! JWT utilities for authentication
//!
//! Access tokens only; the same token is handed out as the `access_token`
//! cookie and accepted as a Bearer header.

use chrono::{Duration, Utc};
use jokebox_core::UserId;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID from the subject
    ///
    /// # Errors
    /// Returns `InvalidToken` if the subject is not a user ID
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.sub.parse().map_err(|_| AppError::InvalidToken)
    }
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Lifetime in seconds
    pub expires_in: i64,
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
}

impl JwtService {
    #[must_use]
    pub fn new(secret: &str, access_token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry,
        }
    }

    /// Sign an access token for a user
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, user_id: UserId) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.access_token_expiry)).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode JWT: {e}")))?;

        Ok(IssuedToken {
            token,
            expires_in: self.access_token_expiry,
        })
    }

    /// Decode and validate a token
    ///
    /// # Errors
    /// `TokenExpired` for an expired token, `InvalidToken` for anything else
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })
    }

    /// Validate a token and return the user it was issued to
    ///
    /// # Errors
    /// Same as [`JwtService::decode_token`], plus `InvalidToken` for a bad subject
    pub fn authenticate(&self, token: &str) -> Result<UserId, AppError> {
        self.decode_token(token)?.user_id()
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret-key-that-is-long-enough", 900)
    }

    #[test]
    fn test_issue_and_authenticate() {
        let service = create_test_service();
        let user_id = UserId::generate();

        let issued = service.issue(user_id).unwrap();
        assert!(!issued.token.is_empty());
        assert_eq!(issued.expires_in, 900);

        assert_eq!(service.authenticate(&issued.token).unwrap(), user_id);
    }

    #[test]
    fn test_claims_window() {
        let service = create_test_service();
        let issued = service.issue(UserId::generate()).unwrap();
        let claims = service.decode_token(&issued.token).unwrap();

        assert_eq!(claims.exp - claims.iat, 900);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();
        let result = service.decode_token("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issued = create_test_service().issue(UserId::generate()).unwrap();
        let other = JwtService::new("a-completely-different-secret-value", 900);
        assert!(matches!(other.authenticate(&issued.token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_expired_token() {
        // well past the default 60s leeway
        let service = JwtService::new("test-secret-key-that-is-long-enough", -3600);
        let issued = service.issue(UserId::generate()).unwrap();
        assert!(matches!(service.decode_token(&issued.token), Err(AppError::TokenExpired)));
    }

    #[test]
    fn test_bad_subject() {
        let claims = Claims {
            sub: "12345".to_string(),
            iat: 0,
            exp: i64::MAX,
        };
        assert!(matches!(claims.user_id(), Err(AppError::InvalidToken)));
    }
}
