//! # jokebox-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `jokebox-core`. It handles:
//!
//! - Connection pool management and schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the transactional vote submission
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jokebox_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use jokebox_db::repositories::PgVoteRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool).await?;
//!     let votes = PgVoteRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{DatabaseConfig, PgPool, create_pool, run_migrations};
pub use repositories::{PgJokeRepository, PgUserRepository, PgVoteRepository};
