//! Pagination extractor
//!
//! Accepts `offset`/`limit`, or a 1-based `page` with `limit`. An explicit
//! `offset` wins over `page`. Limits are clamped later by the service layer.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use swipe_service::PageLimits;

use crate::response::ApiError;
use crate::state::AppState;

/// Raw pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
    /// 1-based page number
    #[serde(default)]
    pub page: Option<i64>,
}

/// Resolved pagination parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl Pagination {
    /// Resolve raw parameters; `page` needs the default size when no limit is given
    pub fn resolve(params: PaginationParams, limits: PageLimits) -> Result<Self, ApiError> {
        if params.offset.is_some_and(|o| o < 0) {
            return Err(ApiError::invalid_query("offset must not be negative"));
        }
        if params.limit.is_some_and(|l| l < 1) {
            return Err(ApiError::invalid_query("limit must be at least 1"));
        }

        let offset = match (params.offset, params.page) {
            (Some(offset), _) => Some(offset),
            (None, Some(page)) if page < 1 => {
                return Err(ApiError::invalid_query("page must be at least 1"));
            }
            (None, Some(page)) => {
                let size = limits.clamp(params.limit);
                Some((page - 1).saturating_mul(size))
            }
            (None, None) => None,
        };

        Ok(Self {
            offset,
            limit: params.limit,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        let app_state = AppState::from_ref(state);
        Pagination::resolve(params, app_state.service_context().page_limits())
    }
}
