//! Voting rules - the reconciler state machine and per-user statistics

mod reconciler;
mod stats;

pub use reconciler::{Reconciliation, VoteTransition, reconcile};
pub use stats::{
    DEFAULT_WINDOW_HOURS, MAX_WINDOW_HOURS, most_frequent_reaction, recent_vote_count,
    recent_window_start,
};
