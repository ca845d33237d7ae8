//! Upstream joke source port

use async_trait::async_trait;

use crate::error::DomainError;

/// A joke as delivered by the upstream source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedJoke {
    pub external_id: String,
    pub question: String,
    pub answer: String,
}

#[async_trait]
pub trait JokeSource: Send + Sync {
    /// Fetch one random joke.
    ///
    /// # Errors
    /// `DomainError::UpstreamUnavailable` on any transport or decode failure.
    async fn fetch_random(&self) -> Result<FetchedJoke, DomainError>;
}
