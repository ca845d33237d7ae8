//! Joke service
//!
//! Pulls a random joke from the upstream source and stores it once.

use jokebox_core::Joke;
use tracing::{debug, info, instrument};

use crate::dto::{FetchedJokeResponse, JokeResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct JokeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> JokeService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch a random joke
    ///
    /// A joke whose upstream id is already stored is returned as-is with
    /// `created = false`. Upstream failures create nothing.
    #[instrument(skip(self))]
    pub async fn fetch_joke(&self) -> ServiceResult<FetchedJokeResponse> {
        let fetched = self.ctx.joke_source().fetch_random().await?;

        if let Some(existing) = self
            .ctx
            .joke_repo()
            .find_by_external_id(&fetched.external_id)
            .await?
        {
            debug!(joke_id = %existing.id, "Joke already stored");
            return Ok(FetchedJokeResponse {
                joke: JokeResponse::from(existing),
                created: false,
            });
        }

        let candidate = Joke::new(fetched.external_id, fetched.question, fetched.answer);
        // Another request may have stored the same upstream id meanwhile
        let (joke, created) = self.ctx.joke_repo().create_if_absent(&candidate).await?;

        if created {
            info!(joke_id = %joke.id, external_id = %joke.external_id, "Stored new joke");
        }

        Ok(FetchedJokeResponse {
            joke: JokeResponse::from(joke),
            created,
        })
    }
}
