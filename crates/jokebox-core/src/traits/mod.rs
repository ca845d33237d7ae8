//! Ports - interfaces the domain needs from infrastructure

mod repositories;
mod source;

pub use repositories::{JokeRepository, RepoResult, UserRepository, VoteOutcome, VoteRepository};
pub use source::{FetchedJoke, JokeSource};
