//! Reaction - the closed set of emoji a user can vote with
//!
//! Each reaction owns a fixed slot in a joke's tally:
//! - 0: 😂 (laugh)
//! - 1: 👍 (thumbs up)
//! - 2: ❤️ (heart)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A vote reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Reaction {
    Laugh,
    ThumbsUp,
    Heart,
}

impl Reaction {
    /// Number of reactions (and tally slots)
    pub const COUNT: usize = 3;

    /// All reactions in slot order
    pub const ALL: [Reaction; Self::COUNT] = [Self::Laugh, Self::ThumbsUp, Self::Heart];

    /// Tally slot for this reaction
    #[inline]
    pub const fn slot(self) -> usize {
        match self {
            Self::Laugh => 0,
            Self::ThumbsUp => 1,
            Self::Heart => 2,
        }
    }

    /// Reaction owning the given tally slot
    #[inline]
    pub const fn from_slot(slot: usize) -> Option<Self> {
        match slot {
            0 => Some(Self::Laugh),
            1 => Some(Self::ThumbsUp),
            2 => Some(Self::Heart),
            _ => None,
        }
    }

    /// Emoji used on the wire
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Laugh => "😂",
            Self::ThumbsUp => "👍",
            Self::Heart => "❤️",
        }
    }

    /// Parse a wire emoji
    ///
    /// # Errors
    /// Returns `DomainError::UnrecognizedReaction` for anything outside the set
    pub fn from_symbol(symbol: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|r| r.symbol() == symbol)
            .ok_or_else(|| DomainError::UnrecognizedReaction(symbol.to_string()))
    }

    /// Stable storage key
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Laugh => "laugh",
            Self::ThumbsUp => "thumbs_up",
            Self::Heart => "heart",
        }
    }

    /// Parse a storage key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_key() == key)
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Reaction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

impl Serialize for Reaction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Reaction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let symbol = String::deserialize(deserializer)?;
        Self::from_symbol(&symbol).map_err(serde::de::Error::custom)
    }
}
