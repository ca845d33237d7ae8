//! Joke entity <-> model mapper

use jokebox_core::entities::Joke;
use jokebox_core::value_objects::{JokeId, Reaction, ReactionTally};

use crate::models::JokeModel;

impl From<JokeModel> for Joke {
    fn from(model: JokeModel) -> Self {
        let tally = TallyColumns {
            laugh: model.laugh_count,
            thumbs_up: model.thumbs_up_count,
            heart: model.heart_count,
        }
        .into();

        Joke {
            id: JokeId::from_uuid(model.id),
            external_id: model.external_id,
            question: model.question,
            answer: model.answer,
            tally,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// The three counter columns of a joke row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TallyColumns {
    pub laugh: i32,
    pub thumbs_up: i32,
    pub heart: i32,
}

impl From<&ReactionTally> for TallyColumns {
    fn from(tally: &ReactionTally) -> Self {
        let column = |r: Reaction| i32::try_from(tally.get(r)).unwrap_or(i32::MAX);
        Self {
            laugh: column(Reaction::Laugh),
            thumbs_up: column(Reaction::ThumbsUp),
            heart: column(Reaction::Heart),
        }
    }
}

impl From<TallyColumns> for ReactionTally {
    fn from(columns: TallyColumns) -> Self {
        // the table's CHECK constraints keep these non-negative
        let count = |c: i32| u32::try_from(c).unwrap_or(0);
        ReactionTally::from_counts([
            count(columns.laugh),
            count(columns.thumbs_up),
            count(columns.heart),
        ])
    }
}
