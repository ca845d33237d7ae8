//! Server setup and initialization
//!
//! Provides the application builder, the maintenance task and the server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use jokebox_common::{AppConfig, AppError, JwtService};
use jokebox_db::{
    create_pool, run_migrations, PgJokeRepository, PgUserRepository, PgVoteRepository,
};
use jokebox_service::{MaintenanceService, ServiceContext, ServiceContextBuilder, TeeheeClient};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{error, info};

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    api.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = jokebox_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(format!("schema setup failed: {e}")))?;
    info!("PostgreSQL connection established");

    let joke_source = TeeheeClient::from_config(&config.joke_source)
        .map_err(|e| AppError::Config(e.to_string()))?;
    info!(endpoint = joke_source.endpoint(), "Joke source configured");

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    let service_context = ServiceContextBuilder::new()
        .pool(pool.clone())
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .joke_repo(Arc::new(PgJokeRepository::new(pool.clone())))
        .vote_repo(Arc::new(PgVoteRepository::new(pool)))
        .joke_source(Arc::new(joke_source))
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the maintenance sweep every `period`, starting one period from now
pub fn spawn_maintenance(ctx: ServiceContext, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match MaintenanceService::new(&ctx).sweep().await {
                Ok(report) => info!(
                    reconciled = report.reconciled,
                    purged = report.purged,
                    "Maintenance sweep finished"
                ),
                Err(e) => error!(error = %e, "Maintenance sweep failed"),
            }
        }
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;
    let maintenance_period = config.maintenance.interval();

    let state = create_app_state(config).await?;

    let maintenance = maintenance_period.map(|period| {
        info!(period_secs = period.as_secs(), "Starting maintenance task");
        spawn_maintenance(state.service_context().clone(), period)
    });

    let app = create_app(state);
    let result = run_server(app, addr).await;

    if let Some(handle) = maintenance {
        handle.abort();
    }
    result
}
