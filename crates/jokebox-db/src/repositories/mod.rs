//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in jokebox-core.

mod error;
mod joke;
mod user;
mod vote;

pub use joke::PgJokeRepository;
pub use user::PgUserRepository;
pub use vote::PgVoteRepository;
