//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Account Requests
// ============================================================================

/// Account signup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Profile / Preferences Requests
// ============================================================================

/// Full replacement of a user's profile
///
/// Omitted optional fields clear the stored value.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertProfileRequest {
    #[serde(default, alias = "fullname")]
    #[validate(length(max = 100, message = "Full name must be at most 100 characters"))]
    pub full_name: Option<String>,

    #[serde(alias = "dob")]
    pub date_of_birth: DateTime<Utc>,

    #[serde(default)]
    #[validate(length(max = 50, message = "Religion must be at most 50 characters"))]
    pub religion: Option<String>,

    #[serde(default)]
    #[validate(length(max = 50, message = "Gender must be at most 50 characters"))]
    pub gender: Option<String>,

    #[serde(default)]
    #[validate(length(max = 50, message = "Country must be at most 50 characters"))]
    pub country: Option<String>,

    #[serde(default)]
    #[validate(length(max = 50, message = "City must be at most 50 characters"))]
    pub city: Option<String>,

    #[serde(default)]
    #[validate(length(max = 2048, message = "Picture must be at most 2048 characters"))]
    pub picture: Option<String>,
}

/// Full replacement of a user's matching preferences
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertPreferencesRequest {
    #[serde(default)]
    #[validate(range(min = 0, max = 150, message = "min_age must be between 0 and 150"))]
    pub min_age: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 0, max = 150, message = "max_age must be between 0 and 150"))]
    pub max_age: Option<i32>,

    #[serde(default)]
    #[validate(length(max = 50, message = "Religion must be at most 50 characters"))]
    pub religion: Option<String>,

    #[serde(default)]
    #[validate(length(max = 50, message = "Gender must be at most 50 characters"))]
    pub gender: Option<String>,

    #[serde(default)]
    #[validate(length(max = 50, message = "Country must be at most 50 characters"))]
    pub country: Option<String>,

    #[serde(default)]
    #[validate(length(max = 50, message = "City must be at most 50 characters"))]
    pub city: Option<String>,
}

// ============================================================================
// Swipe Requests
// ============================================================================

/// Like/pass decision toward another user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSwipeRequest {
    /// Target user id; parsed by the swipe service
    #[validate(length(min = 1, message = "swiped_user_id is required"))]
    pub swiped_user_id: String,

    pub is_liked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_validation() {
        let ok = SignupRequest {
            username: "alice".to_string(),
            email: Some("alice@example.com".to_string()),
            password: "Password123".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short = SignupRequest {
            username: "al".to_string(),
            ..ok.clone()
        };
        assert!(short.validate().is_err());

        let bad_email = SignupRequest {
            email: Some("not-an-email".to_string()),
            ..ok
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_profile_accepts_short_field_names() {
        let request: UpsertProfileRequest = serde_json::from_str(
            r#"{"fullname":"Ana","dob":"1999-04-01T00:00:00Z","gender":"F"}"#,
        )
        .unwrap();

        assert_eq!(request.full_name.as_deref(), Some("Ana"));
        assert_eq!(request.gender.as_deref(), Some("F"));
        assert!(request.city.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_preferences_age_range_validation() {
        let request: UpsertPreferencesRequest =
            serde_json::from_str(r#"{"min_age":-1,"max_age":30}"#).unwrap();
        assert!(request.validate().is_err());

        let empty: UpsertPreferencesRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.validate().is_ok());
    }

    #[test]
    fn test_swipe_requires_is_liked() {
        let missing = serde_json::from_str::<CreateSwipeRequest>(r#"{"swiped_user_id":"x"}"#);
        assert!(missing.is_err());
    }
}
