//! Swipe handlers

use axum::{extract::State, Json};
use swipe_service::dto::{CreateSwipeRequest, PaginatedResponse, SwipeResponse};
use swipe_service::SwipeService;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Record a like or pass
///
/// POST /swipe
pub async fn create_swipe(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateSwipeRequest>,
) -> ApiResult<Created<Json<SwipeResponse>>> {
    let service = SwipeService::new(state.service_context());
    let response = service.record_swipe(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// The caller's swipe history, newest first
///
/// GET /swipe
pub async fn list_swipes(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<SwipeResponse>>> {
    let service = SwipeService::new(state.service_context());
    let response = service
        .list_swipes(auth.user_id, pagination.offset, pagination.limit)
        .await?;
    Ok(Json(response))
}
