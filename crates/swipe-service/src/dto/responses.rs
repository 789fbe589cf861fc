//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! User ids are serialized as hyphenated UUID strings.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Offset-paginated response
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, offset: i64, limit: i64) -> Self {
        let count = data.len();
        Self {
            data,
            pagination: PaginationMeta {
                offset,
                limit,
                count,
                quota_reached: None,
            },
        }
    }

    /// Mark whether the requester's discovery quota ends this listing
    pub fn with_quota_reached(mut self, reached: bool) -> Self {
        self.pagination.quota_reached = Some(reached);
        self
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub offset: i64,
    /// Page size served; for candidates this is after the quota cut
    pub limit: i64,
    /// Items actually returned
    pub count: usize,
    /// Only on candidate listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_reached: Option<bool>,
}

// ============================================================================
// Account Responses
// ============================================================================

/// Account as seen by its owner
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub is_verified: bool,
    pub is_active: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    pub user: UserResponse,
}

/// Current user with profile and preferences
#[derive(Debug, Serialize)]
pub struct UserDetailResponse {
    pub user: UserResponse,
    pub profile: Option<ProfileResponse>,
    pub preferences: Option<PreferencesResponse>,
}

// ============================================================================
// Profile / Preferences Responses
// ============================================================================

/// Profile with derived age
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub full_name: Option<String>,
    pub date_of_birth: DateTime<Utc>,
    pub age: i32,
    pub religion: Option<String>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreferencesResponse {
    pub id: String,
    pub user_id: String,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub religion: Option<String>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Discovery / Swipe Responses
// ============================================================================

/// One discoverable user
#[derive(Debug, Clone, Serialize)]
pub struct CandidateResponse {
    pub id: String,
    pub username: String,
    pub is_verified: bool,
    pub profile: Option<ProfileResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SwipeResponse {
    pub id: String,
    pub user_id: String,
    pub swiped_user_id: String,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
