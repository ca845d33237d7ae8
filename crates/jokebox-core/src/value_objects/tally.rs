//! Per-joke reaction counters keyed by `Reaction`

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use super::reaction::Reaction;

/// Aggregate vote counts for one joke
///
/// Counters are unsigned and saturate at zero. A decrement that would go
/// below zero is reported back to the caller so the drift can be logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ReactionTally {
    counts: [u32; Reaction::COUNT],
}

impl ReactionTally {
    /// A tally with every counter at zero
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            counts: [0; Reaction::COUNT],
        }
    }

    /// Build from counts in slot order
    #[must_use]
    pub const fn from_counts(counts: [u32; Reaction::COUNT]) -> Self {
        Self { counts }
    }

    /// Counts in slot order
    #[inline]
    pub const fn counts(&self) -> [u32; Reaction::COUNT] {
        self.counts
    }

    #[inline]
    pub const fn get(&self, reaction: Reaction) -> u32 {
        self.counts[reaction.slot()]
    }

    /// Add one vote for `reaction`
    pub fn increment(&mut self, reaction: Reaction) {
        let slot = &mut self.counts[reaction.slot()];
        *slot = slot.saturating_add(1);
    }

    /// Remove one vote for `reaction`
    ///
    /// Returns `false` when the counter was already zero, i.e. the tally had
    /// drifted below the number of active votes.
    #[must_use = "a false return signals tally drift"]
    pub fn decrement(&mut self, reaction: Reaction) -> bool {
        let slot = &mut self.counts[reaction.slot()];
        match slot.checked_sub(1) {
            Some(next) => {
                *slot = next;
                true
            }
            None => false,
        }
    }

    /// Sum of all counters
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// True when nobody has an active vote on the joke
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Iterate `(reaction, count)` in slot order
    pub fn iter(&self) -> impl Iterator<Item = (Reaction, u32)> + '_ {
        Reaction::ALL.into_iter().map(|r| (r, self.get(r)))
    }
}

/// Serialized as `[{"label": "😂", "value": 3}, ...]` in slot order
impl Serialize for ReactionTally {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Entry {
            label: Reaction,
            value: u32,
        }

        let mut seq = serializer.serialize_seq(Some(Reaction::COUNT))?;
        for (label, value) in self.iter() {
            seq.serialize_element(&Entry { label, value })?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let tally = ReactionTally::zero();
        assert!(tally.is_zero());
        assert_eq!(tally.total(), 0);
        assert_eq!(tally, ReactionTally::default());
    }

    #[test]
    fn test_increment_and_get() {
        let mut tally = ReactionTally::zero();
        tally.increment(Reaction::Heart);
        tally.increment(Reaction::Heart);
        tally.increment(Reaction::Laugh);

        assert_eq!(tally.get(Reaction::Laugh), 1);
        assert_eq!(tally.get(Reaction::ThumbsUp), 0);
        assert_eq!(tally.get(Reaction::Heart), 2);
        assert_eq!(tally.counts(), [1, 0, 2]);
        assert_eq!(tally.total(), 3);
        assert!(!tally.is_zero());
    }

    #[test]
    fn test_decrement_saturates_and_reports() {
        let mut tally = ReactionTally::from_counts([1, 0, 0]);
        assert!(tally.decrement(Reaction::Laugh));
        assert_eq!(tally.get(Reaction::Laugh), 0);

        assert!(!tally.decrement(Reaction::Laugh));
        assert_eq!(tally.get(Reaction::Laugh), 0);
    }

    #[test]
    fn test_iter_is_slot_ordered() {
        let tally = ReactionTally::from_counts([4, 5, 6]);
        let items: Vec<_> = tally.iter().collect();
        assert_eq!(
            items,
            vec![
                (Reaction::Laugh, 4),
                (Reaction::ThumbsUp, 5),
                (Reaction::Heart, 6)
            ]
        );
    }

    #[test]
    fn test_serialize_wire_shape() {
        let tally = ReactionTally::from_counts([1, 0, 2]);
        let json = serde_json::to_value(tally).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "label": "😂", "value": 1 },
                { "label": "👍", "value": 0 },
                { "label": "❤️", "value": 2 }
            ])
        );
    }
}
