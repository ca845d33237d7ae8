//! User entity - a registered account

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with a fresh ID
    pub fn new(first_name: String, last_name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::generate(),
            first_name,
            last_name,
            email,
            created_at: now,
            updated_at: now,
        }
    }
}
