//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use jokebox_core::{Joke, User, VoteLedger, VoteRecord};

use super::responses::{JokeResponse, UserResponse, VoteEntryResponse, VotedJokeResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&VoteRecord> for VoteEntryResponse {
    fn from(record: &VoteRecord) -> Self {
        Self {
            joke_id: record.joke_id.to_string(),
            emoji: record.reaction,
            voted_at: record.voted_at,
        }
    }
}

impl UserResponse {
    /// Build the user payload from the account and its vote ledger
    pub fn new(user: &User, ledger: &VoteLedger) -> Self {
        Self {
            id: user.id.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            voted_jokes: ledger.records().iter().map(VoteEntryResponse::from).collect(),
        }
    }
}

// ============================================================================
// Joke Mappers
// ============================================================================

impl From<Joke> for JokeResponse {
    fn from(joke: Joke) -> Self {
        Self {
            id: joke.id.to_string(),
            external_id: joke.external_id,
            question: joke.question,
            answer: joke.answer,
            votes: joke.tally,
            created_at: joke.created_at,
            updated_at: joke.updated_at,
        }
    }
}

impl VotedJokeResponse {
    pub fn new(record: &VoteRecord, joke: &Joke) -> Self {
        Self {
            joke_id: joke.id.to_string(),
            question: joke.question.clone(),
            answer: joke.answer.clone(),
            user_vote: record.reaction,
            voted_at: record.voted_at,
            votes: joke.tally,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jokebox_core::Reaction;

    #[test]
    fn test_user_response_includes_ledger() {
        let user = User::new("Ada".into(), "Lovelace".into(), "ada@example.com".into());
        let joke = Joke::new("1".into(), "q".into(), "a".into());
        let ledger = VoteLedger::from_records([VoteRecord::new(joke.id, Reaction::Laugh, Utc::now())]);

        let response = UserResponse::new(&user, &ledger);
        assert_eq!(response.id, user.id.to_string());
        assert_eq!(response.voted_jokes.len(), 1);
        assert_eq!(response.voted_jokes[0].joke_id, joke.id.to_string());
        assert_eq!(response.voted_jokes[0].emoji, Reaction::Laugh);
    }

    #[test]
    fn test_voted_joke_response() {
        let mut joke = Joke::new("1".into(), "q".into(), "a".into());
        joke.tally.increment(Reaction::Heart);
        let record = VoteRecord::new(joke.id, Reaction::Heart, Utc::now());

        let response = VotedJokeResponse::new(&record, &joke);
        assert_eq!(response.user_vote, Reaction::Heart);
        assert_eq!(response.votes.get(Reaction::Heart), 1);
        assert_eq!(response.voted_at, record.voted_at);
    }
}
