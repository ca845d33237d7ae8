//! Vote records - a user's active reactions

use chrono::{DateTime, Utc};

use crate::value_objects::{JokeId, Reaction};

/// A user's currently active vote on one joke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteRecord {
    pub joke_id: JokeId,
    pub reaction: Reaction,
    /// When the vote was first cast; switching reactions keeps it
    pub voted_at: DateTime<Utc>,
}

impl VoteRecord {
    pub fn new(joke_id: JokeId, reaction: Reaction, voted_at: DateTime<Utc>) -> Self {
        Self {
            joke_id,
            reaction,
            voted_at,
        }
    }
}

/// Ordered collection of a user's votes, at most one per joke
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteLedger {
    records: Vec<VoteRecord>,
}

impl VoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from records in order, keeping the first record per joke
    pub fn from_records(records: impl IntoIterator<Item = VoteRecord>) -> Self {
        let mut ledger = Self::new();
        for record in records {
            if ledger.find(record.joke_id).is_none() {
                ledger.records.push(record);
            }
        }
        ledger
    }

    pub fn records(&self) -> &[VoteRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Active vote for a joke, if any
    pub fn find(&self, joke_id: JokeId) -> Option<&VoteRecord> {
        self.records.iter().find(|r| r.joke_id == joke_id)
    }
}
