//! HTTP client for the teehee.dev random joke API

use std::time::Duration;

use async_trait::async_trait;
use jokebox_common::JokeSourceConfig;
use jokebox_core::traits::{FetchedJoke, JokeSource};
use jokebox_core::DomainError;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

const JOKE_PATH: &str = "/api/joke";
const USER_AGENT: &str = concat!("jokebox/", env!("CARGO_PKG_VERSION"));

/// Upstream ids come back either as strings or as numbers
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UpstreamId {
    Text(String),
    Number(i64),
}

impl UpstreamId {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UpstreamJoke {
    id: UpstreamId,
    question: String,
    answer: String,
}

impl From<UpstreamJoke> for FetchedJoke {
    fn from(joke: UpstreamJoke) -> Self {
        Self {
            external_id: joke.id.into_string(),
            question: joke.question,
            answer: joke.answer,
        }
    }
}

/// `JokeSource` backed by the teehee.dev REST API
#[derive(Debug, Clone)]
pub struct TeeheeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl TeeheeClient {
    /// # Errors
    /// Returns `DomainError::InternalError` if the HTTP client cannot be built
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DomainError::InternalError(format!("http client: {e}")))?;

        Ok(Self {
            http,
            endpoint: format!("{}{JOKE_PATH}", base_url.trim_end_matches('/')),
        })
    }

    pub fn from_config(config: &JokeSourceConfig) -> Result<Self, DomainError> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl JokeSource for TeeheeClient {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_random(&self) -> Result<FetchedJoke, DomainError> {
        let response = self.http.get(&self.endpoint).send().await.map_err(|e| {
            warn!(error = %e, "Joke source request failed");
            DomainError::UpstreamUnavailable(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Joke source returned an error status");
            return Err(DomainError::UpstreamUnavailable(format!(
                "HTTP {status} from {}",
                self.endpoint
            )));
        }

        let joke: UpstreamJoke = response
            .json()
            .await
            .map_err(|e| DomainError::UpstreamUnavailable(format!("invalid joke payload: {e}")))?;

        let joke = FetchedJoke::from(joke);
        debug!(external_id = %joke.external_id, "Fetched joke");
        Ok(joke)
    }
}
