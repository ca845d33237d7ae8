//! # jokebox-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    Claims, IssuedToken, JwtService, MIN_PASSWORD_LEN, hash_password, validate_password_strength,
    verify_password,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    JokeSourceConfig, JwtConfig, MaintenanceConfig, RateLimitConfig, ServerConfig,
};
pub use error::{AppError, domain_status};
pub use telemetry::{TracingConfig, TracingError, try_init_tracing, try_init_tracing_with_config};
