//! Preferences entity - what a user wants to see in discovery

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::UserId;

/// Matching preferences, at most one per user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub id: Uuid,
    pub user_id: UserId,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub religion: Option<String>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Preferences {
    /// Create an empty preferences record (no constraints)
    pub fn new(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            min_age: None,
            max_age: None,
            religion: None,
            gender: None,
            country: None,
            city: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reject negative ages and inverted ranges
    pub fn validate_age_range(&self) -> Result<(), DomainError> {
        if self.min_age.is_some_and(|a| a < 0) || self.max_age.is_some_and(|a| a < 0) {
            return Err(DomainError::InvalidArgument(
                "age bounds must not be negative".to_string(),
            ));
        }

        if let (Some(min), Some(max)) = (self.min_age, self.max_age) {
            if min > max {
                return Err(DomainError::InvalidArgument(format!(
                    "min_age ({min}) must not exceed max_age ({max})"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_ages(min: Option<i32>, max: Option<i32>) -> Preferences {
        let mut prefs = Preferences::new(UserId::generate());
        prefs.min_age = min;
        prefs.max_age = max;
        prefs
    }

    #[test]
    fn test_valid_ranges() {
        assert!(with_ages(Some(20), Some(30)).validate_age_range().is_ok());
        assert!(with_ages(Some(25), Some(25)).validate_age_range().is_ok());
        assert!(with_ages(None, Some(30)).validate_age_range().is_ok());
        assert!(with_ages(None, None).validate_age_range().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = with_ages(Some(40), Some(30)).validate_age_range().unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn test_negative_age_rejected() {
        let err = with_ages(Some(-1), None).validate_age_range().unwrap_err();
        assert!(err.is_validation());
    }
}
