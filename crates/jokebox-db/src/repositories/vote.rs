//! PostgreSQL implementation of VoteRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use jokebox_core::entities::{Joke, VoteRecord};
use jokebox_core::traits::{RepoResult, VoteOutcome, VoteRepository};
use jokebox_core::value_objects::{JokeId, Reaction, UserId};
use jokebox_core::voting::reconcile;

use crate::mappers::TallyColumns;
use crate::models::{JokeModel, VoteModel};

use super::error::{joke_not_found, map_db_error, user_not_found};
use super::joke::JOKE_COLUMNS;

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<VoteRecord>> {
        let results = sqlx::query_as::<_, VoteModel>(
            r"
            SELECT user_id, joke_id, reaction, voted_at
            FROM votes
            WHERE user_id = $1
            ORDER BY voted_at, joke_id
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(VoteRecord::try_from).collect()
    }

    /// Locks are taken user row first, then joke row, in every submission.
    /// Returning early drops the transaction, which rolls it back.
    #[instrument(skip(self))]
    async fn submit(
        &self,
        user_id: UserId,
        joke_id: JokeId,
        reaction: Reaction,
        now: DateTime<Utc>,
    ) -> RepoResult<VoteOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(user_id.into_inner())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| user_not_found(user_id))?;

        let mut joke = sqlx::query_as::<_, JokeModel>(&format!(
            "SELECT {JOKE_COLUMNS} FROM jokes WHERE id = $1 FOR UPDATE"
        ))
        .bind(joke_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .map(Joke::from)
        .ok_or_else(|| joke_not_found(joke_id))?;

        let current = sqlx::query_as::<_, VoteModel>(
            r"
            SELECT user_id, joke_id, reaction, voted_at
            FROM votes
            WHERE user_id = $1 AND joke_id = $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(joke_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .map(VoteRecord::try_from)
        .transpose()?;

        let next = reconcile(current.as_ref(), &joke.tally, joke_id, reaction, now);

        match next.entry {
            Some(entry) => {
                // voted_at is only written on first insert
                sqlx::query(
                    r"
                    INSERT INTO votes (user_id, joke_id, reaction, voted_at)
                    VALUES ($1, $2, $3, $4)
                    ON CONFLICT (user_id, joke_id) DO UPDATE SET reaction = EXCLUDED.reaction
                    ",
                )
                .bind(user_id.into_inner())
                .bind(joke_id.into_inner())
                .bind(entry.reaction.as_key())
                .bind(entry.voted_at)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
            None => {
                sqlx::query("DELETE FROM votes WHERE user_id = $1 AND joke_id = $2")
                    .bind(user_id.into_inner())
                    .bind(joke_id.into_inner())
                    .execute(&mut *tx)
                    .await
                    .map_err(map_db_error)?;
            }
        }

        let columns = TallyColumns::from(&next.tally);
        sqlx::query(
            r"
            UPDATE jokes
            SET laugh_count = $2, thumbs_up_count = $3, heart_count = $4, updated_at = $5
            WHERE id = $1
            ",
        )
        .bind(joke_id.into_inner())
        .bind(columns.laugh)
        .bind(columns.thumbs_up)
        .bind(columns.heart)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(transition = next.transition.as_str(), "Vote applied");

        joke.tally = next.tally;
        joke.updated_at = now;

        Ok(VoteOutcome {
            transition: next.transition,
            joke,
            drift: next.drift,
        })
    }
}
