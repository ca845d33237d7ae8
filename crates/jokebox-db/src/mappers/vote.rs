//! Vote record <-> model mapper

use jokebox_core::entities::VoteRecord;
use jokebox_core::error::DomainError;
use jokebox_core::value_objects::{JokeId, Reaction};

use crate::models::VoteModel;

impl TryFrom<VoteModel> for VoteRecord {
    type Error = DomainError;

    fn try_from(model: VoteModel) -> Result<Self, Self::Error> {
        let reaction = Reaction::from_key(&model.reaction).ok_or_else(|| {
            DomainError::DatabaseError(format!("unknown reaction key: {}", model.reaction))
        })?;

        Ok(VoteRecord::new(
            JokeId::from_uuid(model.joke_id),
            reaction,
            model.voted_at,
        ))
    }
}
