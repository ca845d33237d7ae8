//! Joke database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for jokes table
#[derive(Debug, Clone, FromRow)]
pub struct JokeModel {
    pub id: Uuid,
    pub external_id: String,
    pub question: String,
    pub answer: String,
    pub laugh_count: i32,
    pub thumbs_up_count: i32,
    pub heart_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
