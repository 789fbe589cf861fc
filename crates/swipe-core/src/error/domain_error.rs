//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::UserId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Profile not found for user: {0}")]
    ProfileNotFound(UserId),

    #[error("Preferences not found for user: {0}")]
    PreferencesNotFound(UserId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid user id: {0}")]
    InvalidUserId(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already in use")]
    UsernameAlreadyExists,

    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Account / Credential Errors
    // =========================================================================
    #[error("Account is not active")]
    AccountInactive,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Identity provider error: {0}")]
    UpstreamAuth(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::PreferencesNotFound(_) => "UNKNOWN_PREFERENCES",

            // Validation
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::InvalidUserId(_) => "INVALID_USER_ID",

            // Conflict
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Account
            Self::AccountInactive => "ACCOUNT_INACTIVE",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::UpstreamAuth(_) => "IDENTITY_PROVIDER_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::ProfileNotFound(_) | Self::PreferencesNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::InvalidUserId(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameAlreadyExists | Self::EmailAlreadyExists)
    }

    /// Check if the identity provider failed (as opposed to rejecting input)
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::UpstreamAuth(_))
    }
}

impl From<crate::value_objects::UserIdParseError> for DomainError {
    fn from(err: crate::value_objects::UserIdParseError) -> Self {
        match err {
            crate::value_objects::UserIdParseError::InvalidFormat(raw) => Self::InvalidUserId(raw),
        }
    }
}
