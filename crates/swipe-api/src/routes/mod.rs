//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{account, admin, discovery, health, profile, swipes};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately, outside rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(swipe_routes())
        .merge(admin_routes())
}

/// Account, profile and discovery routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(discovery::list_candidates))
        .route("/user/signup", post(account::signup))
        .route("/user/login", post(account::login))
        .route("/user/me", get(account::me))
        .route("/user/:user_id/profile", put(profile::upsert_profile))
        .route("/user/:user_id/preferences", put(profile::upsert_preferences))
}

/// Swipe routes
fn swipe_routes() -> Router<AppState> {
    Router::new().route("/swipe", post(swipes::create_swipe).get(swipes::list_swipes))
}

/// Operator routes, guarded by `x-admin-key`
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users/:user_id/activate", post(admin::activate_user))
        .route("/admin/users/:user_id/verify", post(admin::verify_user))
}
