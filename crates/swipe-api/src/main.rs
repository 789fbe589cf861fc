//! Swipe API server binary
//!
//! Configuration comes from the environment (and `.env` if present); see
//! `AppConfig::from_env` for the variables.

use swipe_common::{try_init_tracing, AppConfig, IdentityConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    let identity = match &config.identity {
        IdentityConfig::Local(_) => "local",
        IdentityConfig::Keycloak(_) => "keycloak",
    };

    info!(
        env = ?config.app.env,
        port = config.server.port,
        identity,
        unverified_limit = config.discovery.unverified_limit,
        verified_limit = ?config.discovery.verified_limit,
        admin_routes = config.admin.api_key.is_some(),
        "Starting swipe API"
    );

    swipe_api::run(config).await?;

    Ok(())
}
