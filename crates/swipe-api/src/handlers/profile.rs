//! Profile and preferences handlers

use axum::{
    extract::{Path, State},
    Json,
};
use swipe_service::dto::{
    PreferencesResponse, ProfileResponse, UpsertPreferencesRequest, UpsertProfileRequest,
};
use swipe_service::ProfileService;

use crate::extractors::{AuthUser, UserIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Create or replace a profile
///
/// PUT /user/{user_id}/profile
pub async fn upsert_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
    ValidatedJson(request): ValidatedJson<UpsertProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let target = path.user_id()?;

    let service = ProfileService::new(state.service_context());
    let response = service.upsert_profile(auth.user_id, target, request).await?;
    Ok(Json(response))
}

/// Create or replace discovery preferences
///
/// PUT /user/{user_id}/preferences
pub async fn upsert_preferences(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
    ValidatedJson(request): ValidatedJson<UpsertPreferencesRequest>,
) -> ApiResult<Json<PreferencesResponse>> {
    let target = path.user_id()?;

    let service = ProfileService::new(state.service_context());
    let response = service
        .upsert_preferences(auth.user_id, target, request)
        .await?;
    Ok(Json(response))
}
