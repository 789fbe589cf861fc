//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::discovery::CandidateQuery;
use crate::entities::{Candidate, Preferences, Profile, Swipe, User};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Record a successful login
    async fn touch_last_login(&self, id: UserId, at: DateTime<Utc>) -> RepoResult<()>;

    /// Activate or deactivate an account
    async fn set_active(&self, id: UserId, active: bool) -> RepoResult<User>;

    /// Mark an account as verified
    async fn mark_verified(&self, id: UserId, at: DateTime<Utc>) -> RepoResult<User>;

    /// List candidates for a requester, ordered by ascending user id
    async fn find_candidates(&self, query: &CandidateQuery) -> RepoResult<Vec<Candidate>>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile owned by a user
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<Profile>>;

    /// Insert, or replace every mutable field of the existing row for `user_id`.
    ///
    /// Returns the stored row: on update the original `id` and `created_at` are kept.
    async fn upsert(&self, profile: &Profile) -> RepoResult<Profile>;
}

// ============================================================================
// Preferences Repository
// ============================================================================

#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// Find the preferences owned by a user
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<Preferences>>;

    /// Same semantics as [`ProfileRepository::upsert`]
    async fn upsert(&self, preferences: &Preferences) -> RepoResult<Preferences>;
}

// ============================================================================
// Swipe Repository
// ============================================================================

#[async_trait]
pub trait SwipeRepository: Send + Sync {
    /// Append a swipe. Missing actor or target fails with `UserNotFound`.
    async fn create(&self, swipe: &Swipe) -> RepoResult<()>;

    /// Swipes made by a user, newest first
    async fn find_by_user(&self, user_id: UserId, offset: i64, limit: i64)
        -> RepoResult<Vec<Swipe>>;
}
