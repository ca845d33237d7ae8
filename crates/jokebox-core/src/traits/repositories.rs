//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Joke, User, VoteRecord};
use crate::error::DomainError;
use crate::value_objects::{JokeId, Reaction, UserId};
use crate::voting::VoteTransition;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Joke Repository
// ============================================================================

#[async_trait]
pub trait JokeRepository: Send + Sync {
    /// Find joke by ID
    async fn find_by_id(&self, id: JokeId) -> RepoResult<Option<Joke>>;

    /// Find joke by the upstream source's identifier
    async fn find_by_external_id(&self, external_id: &str) -> RepoResult<Option<Joke>>;

    /// Find several jokes at once; missing IDs are skipped
    async fn find_by_ids(&self, ids: &[JokeId]) -> RepoResult<Vec<Joke>>;

    /// Insert `joke` unless its external ID is already stored.
    ///
    /// Returns the stored joke and whether this call created it. An existing
    /// joke is returned untouched.
    async fn create_if_absent(&self, joke: &Joke) -> RepoResult<(Joke, bool)>;

    /// Delete every joke whose tally is all zero, returning how many went
    async fn delete_all_zero(&self) -> RepoResult<u64>;

    /// Recompute every tally from the active votes, returning how many jokes
    /// had drifted
    async fn recompute_tallies(&self) -> RepoResult<u64>;
}

// ============================================================================
// Vote Repository
// ============================================================================

/// Result of an atomically applied vote submission
#[derive(Debug, Clone)]
pub struct VoteOutcome {
    pub transition: VoteTransition,
    /// The joke with its updated tally
    pub joke: Joke,
    /// The tally was lower than the active votes before this submission
    pub drift: bool,
}

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// A user's active votes, oldest first
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<VoteRecord>>;

    /// Apply one vote submission.
    ///
    /// Implementations read the user's vote and the joke's tally, run
    /// [`reconcile`](crate::voting::reconcile) and write both results as one
    /// atomic unit. Concurrent submissions for the same user or the same
    /// joke must be serialized.
    ///
    /// # Errors
    /// `UserNotFound` / `JokeNotFound` when either row is absent; nothing is
    /// written in that case.
    async fn submit(
        &self,
        user_id: UserId,
        joke_id: JokeId,
        reaction: Reaction,
        now: DateTime<Utc>,
    ) -> RepoResult<VoteOutcome>;
}
