//! User entity - the root account record

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// User account. Credentials live with the identity provider, never here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: Option<String>,
    pub is_verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new account: inactive and unverified until explicitly changed
    pub fn new(id: UserId, username: String, email: Option<String>) -> Self {
        Self {
            id,
            username,
            email,
            is_verified: false,
            verified_at: None,
            is_active: false,
            created_at: Utc::now(),
            last_login: None,
        }
    }

    /// Allow the account to appear as a discovery candidate
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    /// Mark the account as verified at the given instant
    pub fn mark_verified(&mut self, at: DateTime<Utc>) {
        self.is_verified = true;
        self.verified_at = Some(at);
    }

    pub fn record_login(&mut self, at: DateTime<Utc>) {
        self.last_login = Some(at);
    }
}
