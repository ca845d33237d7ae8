//! Database models - SQLx-compatible structs for PostgreSQL tables

mod joke;
mod user;
mod vote;

pub use joke::JokeModel;
pub use user::UserModel;
pub use vote::VoteModel;
