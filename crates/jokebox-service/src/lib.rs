//! # jokebox-service
//!
//! Application layer: services, DTOs and the upstream joke client.

pub mod dto;
pub mod services;
pub mod upstream;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use services::{
    AuthService, JokeService, MaintenanceService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, StatsService, SweepReport, VoteService,
};
pub use upstream::TeeheeClient;
