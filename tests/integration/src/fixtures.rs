//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use anyhow::Result;
use chrono::{DateTime, Datelike, TimeZone, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::helpers::{assert_json, assert_status, TestServer, TEST_ADMIN_KEY};

/// Short unique tag; the database outlives a test run, so counters are not enough
pub fn unique_tag() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// Signup request
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

impl SignupRequest {
    pub fn unique() -> Self {
        let tag = unique_tag();
        Self {
            username: format!("user_{tag}"),
            email: Some(format!("{tag}@example.com")),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_signup(signup: &SignupRequest) -> Self {
        Self {
            username: signup.username.clone(),
            password: signup.password.clone(),
        }
    }
}

/// Account as returned by the API
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub is_verified: bool,
    pub is_active: bool,
    pub verified_at: Option<String>,
    pub last_login: Option<String>,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

/// Profile request body
#[derive(Debug, Serialize)]
pub struct ProfileRequest {
    pub full_name: Option<String>,
    pub date_of_birth: DateTime<Utc>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}

impl ProfileRequest {
    /// Profile for someone who turned `age` on January 1 of this year
    pub fn aged(age: i32, gender: &str, city: &str) -> Self {
        let year = Utc::now().year() - age;
        Self {
            full_name: Some(format!("Test Person {age}")),
            date_of_birth: Utc
                .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or_else(Utc::now),
            gender: Some(gender.to_string()),
            country: Some("Testland".to_string()),
            city: Some(city.to_string()),
        }
    }
}

/// Profile as returned by the API
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub age: i32,
    pub gender: Option<String>,
    pub city: Option<String>,
    pub created_at: String,
}

/// Preferences request body
#[derive(Debug, Default, Serialize)]
pub struct PreferencesRequest {
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub gender: Option<String>,
    pub city: Option<String>,
}

/// Preferences as returned by the API
#[derive(Debug, Deserialize)]
pub struct PreferencesResponse {
    pub id: String,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
}

/// Current user detail
#[derive(Debug, Deserialize)]
pub struct UserDetailResponse {
    pub user: UserResponse,
    pub profile: Option<ProfileResponse>,
    pub preferences: Option<PreferencesResponse>,
}

/// One discoverable user
#[derive(Debug, Deserialize)]
pub struct CandidateResponse {
    pub id: String,
    pub username: String,
    pub profile: Option<ProfileResponse>,
}

/// Swipe request body
#[derive(Debug, Serialize)]
pub struct SwipeRequest {
    pub swiped_user_id: String,
    pub is_liked: bool,
}

/// Recorded swipe
#[derive(Debug, Deserialize)]
pub struct SwipeResponse {
    pub id: String,
    pub user_id: String,
    pub swiped_user_id: String,
    pub is_liked: bool,
}

/// Pagination metadata
#[derive(Debug, Deserialize)]
pub struct PaginationMeta {
    pub offset: i64,
    pub limit: i64,
    pub count: usize,
    #[serde(default)]
    pub quota_reached: Option<bool>,
}

/// Paginated list
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// A signed-up, activated and logged-in account
#[derive(Debug)]
pub struct TestUser {
    pub id: String,
    pub username: String,
    pub token: String,
}

impl TestUser {
    /// Sign up, activate through the admin route and log in a fresh account
    pub async fn create(server: &TestServer) -> Result<Self> {
        let signup = SignupRequest::unique();

        let response = server.post("/api/v1/user/signup", &signup).await?;
        let user: UserResponse = assert_json(response, StatusCode::CREATED).await?;

        let response = server
            .post_admin(
                &format!("/api/v1/admin/users/{}/activate", user.id),
                Some(TEST_ADMIN_KEY),
            )
            .await?;
        assert_status(response, StatusCode::OK).await?;

        let response = server
            .post("/api/v1/user/login", &LoginRequest::from_signup(&signup))
            .await?;
        let login: LoginResponse = assert_json(response, StatusCode::OK).await?;

        Ok(Self {
            id: user.id,
            username: signup.username,
            token: login.access_token,
        })
    }
}
