//! Operator key extractor for admin routes

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::middleware::ADMIN_KEY_HEADER;
use crate::response::ApiError;
use crate::state::AppState;

/// Proof that the request carried the configured `x-admin-key`
///
/// With no key configured every admin request is rejected.
#[derive(Debug, Clone, Copy)]
pub struct AdminKey;

#[async_trait]
impl<S> FromRequestParts<S> for AdminKey
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let presented = parts
            .headers
            .get(ADMIN_KEY_HEADER)
            .and_then(|v| v.to_str().ok());

        check_admin_key(app_state.config().admin.api_key.as_deref(), presented)
    }
}

fn check_admin_key(expected: Option<&str>, presented: Option<&str>) -> Result<AdminKey, ApiError> {
    match (expected, presented) {
        (Some(expected), Some(presented)) if expected == presented => Ok(AdminKey),
        (None, _) => {
            tracing::warn!("Admin request rejected: ADMIN_API_KEY is not configured");
            Err(ApiError::InvalidAdminKey)
        }
        _ => {
            tracing::warn!("Admin request rejected: wrong or missing key");
            Err(ApiError::InvalidAdminKey)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_admin_key() {
        assert!(check_admin_key(Some("k3y"), Some("k3y")).is_ok());
        assert!(check_admin_key(Some("k3y"), Some("nope")).is_err());
        assert!(check_admin_key(Some("k3y"), None).is_err());
        assert!(check_admin_key(None, Some("anything")).is_err());
    }
}
