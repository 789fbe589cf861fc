//! Profile entity - the public card shown to other users

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use uuid::Uuid;

use crate::value_objects::UserId;

/// One profile per user, written with upsert semantics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: UserId,
    pub full_name: Option<String>,
    pub date_of_birth: DateTime<Utc>,
    pub religion: Option<String>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile with only the required fields set
    pub fn new(user_id: UserId, date_of_birth: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            full_name: None,
            date_of_birth,
            religion: None,
            gender: None,
            country: None,
            city: None,
            picture: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Age in whole years on the given day.
    ///
    /// Year difference, minus one when `today` falls earlier in its year
    /// than the birthday does (compared by day-of-year).
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let born = self.date_of_birth.date_naive();
        let mut age = today.year() - born.year();
        if today.ordinal() < born.ordinal() {
            age -= 1;
        }
        age
    }

    /// Age as of now (UTC)
    pub fn age(&self) -> i32 {
        self.age_on(Utc::now().date_naive())
    }
}
