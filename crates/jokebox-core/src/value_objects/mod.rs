//! Value objects - immutable types that represent domain concepts

mod ids;
mod reaction;
mod tally;

pub use ids::{IdParseError, JokeId, UserId};
pub use reaction::Reaction;
pub use tally::ReactionTally;
