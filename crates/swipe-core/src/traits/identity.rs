//! Identity provider port
//!
//! Account credentials and access tokens are owned by an external identity
//! provider. Only the signup/login path and request authentication use it;
//! discovery and swipes never do.

use async_trait::async_trait;

use crate::error::DomainError;

/// Result type for identity provider calls
pub type IdentityResult<T> = Result<T, DomainError>;

/// Access token issued on successful authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    pub token_type: String,
    /// Lifetime in seconds, when the provider reports it
    pub expires_in: Option<i64>,
}

impl AccessToken {
    pub fn bearer(token: impl Into<String>, expires_in: Option<i64>) -> Self {
        Self {
            token: token.into(),
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

/// Outcome of validating a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIntrospection {
    pub active: bool,
    /// Subject claim; the account's external id
    pub subject: Option<String>,
}

impl TokenIntrospection {
    pub fn active(subject: impl Into<String>) -> Self {
        Self {
            active: true,
            subject: Some(subject.into()),
        }
    }

    pub fn inactive() -> Self {
        Self {
            active: false,
            subject: None,
        }
    }
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account and return its external id
    async fn create_account(&self, username: &str, email: Option<&str>) -> IdentityResult<String>;

    /// Set the account's password
    async fn set_credential(&self, external_id: &str, secret: &str) -> IdentityResult<()>;

    /// Exchange username and password for an access token
    async fn authenticate(&self, username: &str, secret: &str) -> IdentityResult<AccessToken>;

    /// Remove an account; used to compensate a failed signup
    async fn delete_account(&self, external_id: &str) -> IdentityResult<()>;

    /// Check a token. Invalid or expired tokens are inactive, not errors.
    async fn validate_token(&self, token: &str) -> IdentityResult<TokenIntrospection>;
}
