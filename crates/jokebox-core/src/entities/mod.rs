//! Domain entities - core business objects

mod joke;
mod user;
mod vote;

pub use joke::Joke;
pub use user::User;
pub use vote::{VoteLedger, VoteRecord};
