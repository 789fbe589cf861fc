//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use swipe_service::dto::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// Basic health check
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Liveness probe
///
/// GET /health/live
pub async fn liveness_check() -> StatusCode {
    StatusCode::OK
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let db_healthy = database_ready(&state).await;

    let response = ReadinessResponse::ready(db_healthy);
    let status = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

async fn database_ready(state: &AppState) -> bool {
    match state.pool().acquire().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check: database unavailable");
            false
        }
    }
}
