//! Per-user voting statistics

use std::collections::HashMap;

use chrono::Utc;
use jokebox_core::voting::{
    DEFAULT_WINDOW_HOURS, most_frequent_reaction, recent_vote_count, recent_window_start,
};
use jokebox_core::{JokeId, UserId, VoteLedger};
use tracing::instrument;

use crate::dto::{MostCommonEmojiResponse, VoteCountResponse, VotedJokeResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn ledger(&self, user_id: UserId) -> ServiceResult<VoteLedger> {
        let records = self.ctx.vote_repo().find_by_user(user_id).await?;
        Ok(VoteLedger::from_records(records))
    }

    /// Jokes the user currently has a vote on, in ledger order
    ///
    /// Entries whose joke no longer exists are skipped.
    #[instrument(skip(self))]
    pub async fn voted_jokes(&self, user_id: UserId) -> ServiceResult<Vec<VotedJokeResponse>> {
        let ledger = self.ledger(user_id).await?;
        if ledger.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<JokeId> = ledger.records().iter().map(|r| r.joke_id).collect();
        let jokes: HashMap<JokeId, _> = self
            .ctx
            .joke_repo()
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|joke| (joke.id, joke))
            .collect();

        Ok(ledger
            .records()
            .iter()
            .filter_map(|record| {
                jokes
                    .get(&record.joke_id)
                    .map(|joke| VotedJokeResponse::new(record, joke))
            })
            .collect())
    }

    /// The reaction the user votes with most often
    #[instrument(skip(self))]
    pub async fn most_common_reaction(
        &self,
        user_id: UserId,
    ) -> ServiceResult<MostCommonEmojiResponse> {
        let ledger = self.ledger(user_id).await?;
        Ok(MostCommonEmojiResponse {
            most_common_emoji: most_frequent_reaction(ledger.records()),
        })
    }

    /// Votes cast within the last `hours` (24 by default)
    #[instrument(skip(self))]
    pub async fn recent_vote_count(
        &self,
        user_id: UserId,
        hours: Option<u32>,
    ) -> ServiceResult<VoteCountResponse> {
        let window_start =
            recent_window_start(Utc::now(), hours.unwrap_or(DEFAULT_WINDOW_HOURS))?;
        let ledger = self.ledger(user_id).await?;
        Ok(VoteCountResponse {
            vote_count: recent_vote_count(ledger.records(), window_start),
        })
    }
}
