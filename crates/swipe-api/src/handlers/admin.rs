//! Operator handlers
//!
//! Account activation and verification, both guarded by `x-admin-key`.

use axum::{
    extract::{Path, State},
    Json,
};
use swipe_service::dto::UserResponse;
use swipe_service::AccountService;

use crate::extractors::{AdminKey, UserIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Activate an account so it can log in and be discovered
///
/// POST /admin/users/{user_id}/activate
pub async fn activate_user(
    State(state): State<AppState>,
    _admin: AdminKey,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = path.user_id()?;

    let service = AccountService::new(state.service_context());
    let response = service.activate(user_id).await?;
    Ok(Json(response))
}

/// Mark a user as verified
///
/// POST /admin/users/{user_id}/verify
pub async fn verify_user(
    State(state): State<AppState>,
    _admin: AdminKey,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = path.user_id()?;

    let service = AccountService::new(state.service_context());
    let response = service.verify(user_id).await?;
    Ok(Json(response))
}
