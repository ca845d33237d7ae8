//! Integration test utilities for the jokebox server
//!
//! Spawns the real router against PostgreSQL with a stub upstream joke
//! source, and drives it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
