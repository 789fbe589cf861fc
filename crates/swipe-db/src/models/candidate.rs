//! Candidate row: a user LEFT JOINed with their profile

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// One row of the discovery query. Profile columns are NULL when the
/// candidate has no profile.
#[derive(Debug, Clone, FromRow)]
pub struct CandidateRow {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub is_verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,

    pub profile_id: Option<Uuid>,
    pub full_name: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub religion: Option<String>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub picture: Option<String>,
    pub profile_created_at: Option<DateTime<Utc>>,
    pub profile_updated_at: Option<DateTime<Utc>>,
}
