//! # jokebox-core
//!
//! Domain layer containing entities, value objects, the vote reconciler,
//! statistics and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;
pub mod voting;

// Re-export commonly used types at crate root
pub use entities::{Joke, User, VoteLedger, VoteRecord};
pub use error::DomainError;
pub use traits::{
    FetchedJoke, JokeRepository, JokeSource, RepoResult, UserRepository, VoteOutcome,
    VoteRepository,
};
pub use value_objects::{IdParseError, JokeId, Reaction, ReactionTally, UserId};
pub use voting::{Reconciliation, VoteTransition, reconcile};
