//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use member_common::{AppConfig, AppError, AppResult};
use member_db::{create_pool, run_migrations};
use member_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config, MiddlewareSettings};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// API routes sit behind the rate limiter; health routes do not.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let settings = MiddlewareSettings {
        rate_limit: &config.rate_limit,
        cors: &config.cors,
        request_timeout: Duration::from_secs(config.app.request_timeout_secs),
        is_production: config.app.env.is_production(),
    };

    let api = apply_middleware_with_config(create_router(), &settings);
    let health = apply_middleware(health_routes(), &settings);

    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    info!("Connecting to PostgreSQL...");
    let db_config = member_db::DatabaseConfig::new(
        config.database.url.clone(),
        config.database.max_connections,
        config.database.min_connections,
    );
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
        info!("Database migrations applied");
    }

    let service_context = ServiceContextBuilder::new().pool(pool).build()?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(AppError::internal)?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API_HOST/API_PORT: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
