//! Vote service
//!
//! Validates the requested reaction, then hands the read-modify-write to
//! the vote repository, which applies it atomically.

use chrono::Utc;
use jokebox_core::{JokeId, Reaction, UserId};
use tracing::{info, instrument, warn};

use crate::dto::{JokeResponse, VoteResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Cast, retract or switch the user's vote on a joke
    ///
    /// An unrecognized emoji is rejected before any state is read.
    #[instrument(skip(self), fields(user_id = %user_id, joke_id = %joke_id))]
    pub async fn submit_vote(
        &self,
        user_id: UserId,
        joke_id: JokeId,
        emoji: &str,
    ) -> ServiceResult<VoteResponse> {
        let reaction = Reaction::from_symbol(emoji)?;

        let outcome = self
            .ctx
            .vote_repo()
            .submit(user_id, joke_id, reaction, Utc::now())
            .await?;

        if outcome.drift {
            warn!(
                transition = outcome.transition.as_str(),
                tally = ?outcome.joke.tally.counts(),
                "Tally was already at zero when removing a vote"
            );
        }

        info!(
            transition = outcome.transition.as_str(),
            reaction = %reaction,
            "Vote applied"
        );

        Ok(VoteResponse {
            message: outcome.transition.message().to_string(),
            joke: JokeResponse::from(outcome.joke),
        })
    }
}
