//! Entity to model mappers
//!
//! Conversions between domain entities (jokebox-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` / `TallyColumns`: Prepare entity data for database writes

mod joke;
mod user;
mod vote;

pub use joke::TallyColumns;
pub use user::UserInsert;
