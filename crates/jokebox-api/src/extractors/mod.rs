//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation and path/query parsing.

mod auth;
mod path;
mod validated;

pub use auth::{ACCESS_TOKEN_COOKIE, AuthUser};
pub use path::{JokeIdPath, QueryParams};
pub use validated::{JsonBody, ValidatedJson};
