//! Database connection pool management

mod postgres;
mod schema;

pub use postgres::{DatabaseConfig, create_pool};
pub use schema::run_migrations;

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
