//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use swipe_core::error::DomainError;
use swipe_core::value_objects::UserId;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation by constraint name, falling back to a database error
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> Option<DomainError>,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if let Some(mapped) = on_unique(db_err.constraint()) {
                return mapped;
            }
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Map a foreign-key violation to the missing user, by constraint name
pub fn map_foreign_key_violation<F>(e: SqlxError, missing_user: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> UserId,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return DomainError::UserNotFound(missing_user(db_err.constraint()));
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: UserId) -> DomainError {
    DomainError::UserNotFound(id)
}
