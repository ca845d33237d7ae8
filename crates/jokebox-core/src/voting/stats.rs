//! Per-user voting statistics over a vote ledger

use chrono::{DateTime, Duration, Utc};

use crate::entities::VoteRecord;
use crate::error::DomainError;
use crate::value_objects::Reaction;

/// Window used by the recent vote count when none is given
pub const DEFAULT_WINDOW_HOURS: u32 = 24;

/// Largest accepted window (30 days)
pub const MAX_WINDOW_HOURS: u32 = 720;

/// Reaction the user picks most often.
///
/// Returns `None` for an empty ledger. On a tie, the reaction that appears
/// first in ledger order wins.
pub fn most_frequent_reaction(records: &[VoteRecord]) -> Option<Reaction> {
    let mut counts = [0usize; Reaction::COUNT];
    let mut first_seen = [usize::MAX; Reaction::COUNT];

    for (position, record) in records.iter().enumerate() {
        let slot = record.reaction.slot();
        counts[slot] += 1;
        first_seen[slot] = first_seen[slot].min(position);
    }

    Reaction::ALL
        .into_iter()
        .filter(|r| counts[r.slot()] > 0)
        .max_by(|a, b| {
            counts[a.slot()]
                .cmp(&counts[b.slot()])
                .then_with(|| first_seen[b.slot()].cmp(&first_seen[a.slot()]))
        })
}

/// Number of votes cast at or after `window_start`
pub fn recent_vote_count(records: &[VoteRecord], window_start: DateTime<Utc>) -> usize {
    records
        .iter()
        .filter(|r| r.voted_at >= window_start)
        .count()
}

/// Start of a window reaching `hours` back from `now`
pub fn recent_window_start(now: DateTime<Utc>, hours: u32) -> Result<DateTime<Utc>, DomainError> {
    if !(1..=MAX_WINDOW_HOURS).contains(&hours) {
        return Err(DomainError::ValidationError(format!(
            "hours must be between 1 and {MAX_WINDOW_HOURS}"
        )));
    }
    Ok(now - Duration::hours(i64::from(hours)))
}
