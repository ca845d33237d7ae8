//! PostgreSQL implementation of JokeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

use jokebox_core::entities::Joke;
use jokebox_core::error::DomainError;
use jokebox_core::traits::{JokeRepository, RepoResult};
use jokebox_core::value_objects::JokeId;

use crate::mappers::TallyColumns;
use crate::models::JokeModel;

use super::error::map_db_error;

pub(crate) const JOKE_COLUMNS: &str = "id, external_id, question, answer, laugh_count, \
     thumbs_up_count, heart_count, created_at, updated_at";

/// PostgreSQL implementation of JokeRepository
#[derive(Clone)]
pub struct PgJokeRepository {
    pool: PgPool,
}

impl PgJokeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JokeRepository for PgJokeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: JokeId) -> RepoResult<Option<Joke>> {
        let result = sqlx::query_as::<_, JokeModel>(&format!(
            "SELECT {JOKE_COLUMNS} FROM jokes WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Joke::from))
    }

    #[instrument(skip(self))]
    async fn find_by_external_id(&self, external_id: &str) -> RepoResult<Option<Joke>> {
        let result = sqlx::query_as::<_, JokeModel>(&format!(
            "SELECT {JOKE_COLUMNS} FROM jokes WHERE external_id = $1"
        ))
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Joke::from))
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[JokeId]) -> RepoResult<Vec<Joke>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = ids.iter().map(|id| id.into_inner()).collect();
        let results = sqlx::query_as::<_, JokeModel>(&format!(
            "SELECT {JOKE_COLUMNS} FROM jokes WHERE id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Joke::from).collect())
    }

    #[instrument(skip(self, joke), fields(external_id = %joke.external_id))]
    async fn create_if_absent(&self, joke: &Joke) -> RepoResult<(Joke, bool)> {
        let columns = TallyColumns::from(&joke.tally);

        let inserted = sqlx::query_as::<_, JokeModel>(&format!(
            r"
            INSERT INTO jokes (id, external_id, question, answer, laugh_count, thumbs_up_count,
                               heart_count, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (external_id) DO NOTHING
            RETURNING {JOKE_COLUMNS}
            "
        ))
        .bind(joke.id.into_inner())
        .bind(&joke.external_id)
        .bind(&joke.question)
        .bind(&joke.answer)
        .bind(columns.laugh)
        .bind(columns.thumbs_up)
        .bind(columns.heart)
        .bind(joke.created_at)
        .bind(joke.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        if let Some(model) = inserted {
            return Ok((Joke::from(model), true));
        }

        // Lost the race (or already stored): hand back the existing row
        let existing = self.find_by_external_id(&joke.external_id).await?.ok_or_else(|| {
            DomainError::DatabaseError(format!(
                "joke {} vanished after insert conflict",
                joke.external_id
            ))
        })?;

        Ok((existing, false))
    }

    #[instrument(skip(self))]
    async fn delete_all_zero(&self) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM jokes
            WHERE laugh_count = 0 AND thumbs_up_count = 0 AND heart_count = 0
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn recompute_tallies(&self) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Same lock a vote submission takes on its joke, so no submission is
        // half-applied while the counts are read.
        let locked = sqlx::query_scalar::<_, Uuid>("SELECT id FROM jokes ORDER BY id FOR UPDATE")
            .fetch_all(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if locked.is_empty() {
            return Ok(0);
        }

        let corrected = sqlx::query(
            r"
            WITH actual AS (
                SELECT j.id,
                       COUNT(v.joke_id) FILTER (WHERE v.reaction = 'laugh')::INT     AS laugh,
                       COUNT(v.joke_id) FILTER (WHERE v.reaction = 'thumbs_up')::INT AS thumbs_up,
                       COUNT(v.joke_id) FILTER (WHERE v.reaction = 'heart')::INT     AS heart
                FROM jokes j
                LEFT JOIN votes v ON v.joke_id = j.id
                WHERE j.id = ANY($1)
                GROUP BY j.id
            )
            UPDATE jokes j
            SET laugh_count = a.laugh,
                thumbs_up_count = a.thumbs_up,
                heart_count = a.heart,
                updated_at = NOW()
            FROM actual a
            WHERE j.id = a.id
              AND (j.laugh_count, j.thumbs_up_count, j.heart_count)
                  IS DISTINCT FROM (a.laugh, a.thumbs_up, a.heart)
            ",
        )
        .bind(locked.as_slice())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        tx.commit().await.map_err(map_db_error)?;

        if corrected > 0 {
            info!(corrected, "Recomputed drifted joke tallies");
        }

        Ok(corrected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgJokeRepository>();
    }
}
