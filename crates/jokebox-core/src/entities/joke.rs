//! Joke entity - a joke pulled from the upstream source plus its vote tally

use chrono::{DateTime, Utc};

use crate::value_objects::{JokeId, ReactionTally};

/// Joke entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub id: JokeId,
    /// Identifier assigned by the upstream joke source (dedup key)
    pub external_id: String,
    pub question: String,
    pub answer: String,
    pub tally: ReactionTally,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Joke {
    /// Create a freshly fetched joke with an all-zero tally
    pub fn new(external_id: String, question: String, answer: String) -> Self {
        let now = Utc::now();
        Self {
            id: JokeId::generate(),
            external_id,
            question,
            answer,
            tally: ReactionTally::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    /// True when the cleanup sweep may delete this joke
    #[inline]
    pub fn is_unvoted(&self) -> bool {
        self.tally.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Reaction;

    #[test]
    fn test_new_joke_starts_unvoted() {
        let joke = Joke::new(
            "42".to_string(),
            "Why did the scarecrow win an award?".to_string(),
            "He was outstanding in his field.".to_string(),
        );
        assert_eq!(joke.external_id, "42");
        assert!(joke.is_unvoted());
        assert_eq!(joke.tally.counts(), [0, 0, 0]);
        assert_eq!(joke.created_at, joke.updated_at);
    }

    #[test]
    fn test_voted_joke_is_not_unvoted() {
        let mut joke = Joke::new("1".to_string(), "q".to_string(), "a".to_string());
        joke.tally.increment(Reaction::ThumbsUp);
        assert!(!joke.is_unvoted());
    }
}
