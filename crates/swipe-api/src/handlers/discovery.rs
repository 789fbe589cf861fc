//! Candidate discovery handler

use axum::{extract::State, Json};
use swipe_service::dto::{CandidateResponse, PaginatedResponse};
use swipe_service::DiscoveryService;

use crate::extractors::{AuthUser, Pagination};
use crate::response::ApiResult;
use crate::state::AppState;

/// Candidates the caller may swipe on next
///
/// GET /user?offset=&limit= or GET /user?page=&limit=
pub async fn list_candidates(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<CandidateResponse>>> {
    let service = DiscoveryService::new(state.service_context());
    let response = service
        .find_candidates_page(auth.user_id, pagination.offset, pagination.limit)
        .await?;
    Ok(Json(response))
}
