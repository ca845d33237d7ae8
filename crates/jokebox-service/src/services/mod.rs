//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod context;
pub mod error;
pub mod joke;
pub mod maintenance;
pub mod stats;
pub mod vote;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use joke::JokeService;
pub use maintenance::{MaintenanceService, SweepReport};
pub use stats::StatsService;
pub use vote::VoteService;
