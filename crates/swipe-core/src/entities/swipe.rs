//! Swipe entity - one directional like/pass decision

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::UserId;

/// Immutable record of `user_id` deciding on `swiped_user_id`.
///
/// Swipes are append-only: a repeated decision on the same target is a new row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swipe {
    pub id: Uuid,
    pub user_id: UserId,
    pub swiped_user_id: UserId,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
}

impl Swipe {
    pub fn new(
        user_id: UserId,
        swiped_user_id: UserId,
        is_liked: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            swiped_user_id,
            is_liked,
            created_at,
        }
    }
}
