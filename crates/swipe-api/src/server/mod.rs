//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use swipe_common::{AppConfig, AppError};
use swipe_db::{
    create_pool, run_migrations, PgPreferencesRepository, PgProfileRepository, PgSwipeRepository,
    PgUserRepository,
};
use swipe_identity::build_identity_provider;
use swipe_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes sit outside the rate limiter.
///
/// # Errors
/// Returns `AppError::Config` if the rate limiter cannot be built from config
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.server.request_timeout_secs,
        config.app.env.is_production(),
    )?;

    Ok(Router::new()
        .merge(health_routes())
        .merge(api)
        .with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = swipe_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.auto_migrate {
        run_migrations(&pool, None)
            .await
            .map_err(|e| AppError::Database(format!("migrations failed: {e}")))?;
        info!("Database migrations applied");
    } else {
        warn!("Automatic migrations disabled");
    }

    let identity = build_identity_provider(&config.identity)
        .map_err(|e| AppError::Config(format!("identity provider: {e}")))?;

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let profile_repo = Arc::new(PgProfileRepository::new(pool.clone()));
    let preferences_repo = Arc::new(PgPreferencesRepository::new(pool.clone()));
    let swipe_repo = Arc::new(PgSwipeRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .user_repo(user_repo)
        .profile_repo(profile_repo)
        .preferences_repo(preferences_repo)
        .swipe_repo(swipe_repo)
        .identity(identity)
        .discovery(&config.discovery)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    info!(
        unverified_limit = config.discovery.unverified_limit,
        verified_limit = ?config.discovery.verified_limit,
        "Discovery quota configured"
    );

    Ok(AppState::new(service_context, pool, config))
}

/// Run the HTTP server until Ctrl-C or SIGTERM
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}
