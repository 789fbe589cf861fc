//! Preferences database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for preferences table
#[derive(Debug, Clone, FromRow)]
pub struct PreferencesModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub religion: Option<String>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
