//! Swipe database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for swipes table
#[derive(Debug, Clone, FromRow)]
pub struct SwipeModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub swiped_user_id: Uuid,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
}
