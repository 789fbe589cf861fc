//! Account handlers
//!
//! Signup, login and the current user.

use axum::{extract::State, Json};
use swipe_service::dto::{
    LoginRequest, LoginResponse, SignupRequest, UserDetailResponse, UserResponse,
};
use swipe_service::AccountService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new account
///
/// POST /user/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = AccountService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Created(Json(response)))
}

/// Login with username and password
///
/// POST /user/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Current user with profile and preferences
///
/// GET /user/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserDetailResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.me(auth.user_id).await?;
    Ok(Json(response))
}
