//! Vote reconciliation
//!
//! Given a user's current vote on a joke (if any), the joke's tally and the
//! requested reaction, compute the user's next vote and the next tally:
//!
//! | current         | requested | result                      |
//! |-----------------|-----------|-----------------------------|
//! | none            | R         | cast R, `+1` on R           |
//! | R               | R         | retract, `-1` on R          |
//! | R1              | R2 != R1  | switch, `-1` on R1, `+1` R2 |

use chrono::{DateTime, Utc};

use crate::entities::VoteRecord;
use crate::value_objects::{JokeId, Reaction, ReactionTally};

/// What a vote submission did to the user's vote on a joke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTransition {
    /// First vote on the joke
    Cast(Reaction),
    /// Same reaction repeated; the vote is removed
    Retracted(Reaction),
    /// Different reaction; the vote is moved
    Switched { from: Reaction, to: Reaction },
}

impl VoteTransition {
    /// Confirmation returned to the client
    pub fn message(self) -> &'static str {
        "Vote updated!"
    }

    /// Short name for logs
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cast(_) => "cast",
            Self::Retracted(_) => "retracted",
            Self::Switched { .. } => "switched",
        }
    }
}

/// Output of [`reconcile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    /// The user's vote after the transition, `None` after a retraction
    pub entry: Option<VoteRecord>,
    pub tally: ReactionTally,
    pub transition: VoteTransition,
    /// A decrement found its counter already at zero
    pub drift: bool,
}

impl Reconciliation {
    pub fn message(&self) -> &'static str {
        self.transition.message()
    }
}

/// Compute the next vote and tally for one submission.
///
/// `current` must be the user's vote on `joke_id`. Switching keeps the
/// original `voted_at`.
pub fn reconcile(
    current: Option<&VoteRecord>,
    tally: &ReactionTally,
    joke_id: JokeId,
    requested: Reaction,
    now: DateTime<Utc>,
) -> Reconciliation {
    debug_assert!(current.is_none_or(|r| r.joke_id == joke_id));

    let mut next = *tally;

    match current {
        None => {
            next.increment(requested);
            Reconciliation {
                entry: Some(VoteRecord::new(joke_id, requested, now)),
                tally: next,
                transition: VoteTransition::Cast(requested),
                drift: false,
            }
        }
        Some(existing) if existing.reaction == requested => {
            let drift = !next.decrement(requested);
            Reconciliation {
                entry: None,
                tally: next,
                transition: VoteTransition::Retracted(requested),
                drift,
            }
        }
        Some(existing) => {
            let from = existing.reaction;
            let drift = !next.decrement(from);
            next.increment(requested);
            Reconciliation {
                entry: Some(VoteRecord {
                    reaction: requested,
                    ..*existing
                }),
                tally: next,
                transition: VoteTransition::Switched {
                    from,
                    to: requested,
                },
                drift,
            }
        }
    }
}
