//! Vote database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for votes table
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub user_id: Uuid,
    pub joke_id: Uuid,
    /// Storage key of the reaction (`laugh`, `thumbs_up`, `heart`)
    pub reaction: String,
    pub voted_at: DateTime<Utc>,
}
