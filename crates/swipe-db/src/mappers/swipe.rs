//! Swipe entity <-> model mapper

use swipe_core::entities::Swipe;
use swipe_core::value_objects::UserId;

use crate::models::SwipeModel;

impl From<SwipeModel> for Swipe {
    fn from(model: SwipeModel) -> Self {
        Swipe {
            id: model.id,
            user_id: UserId::new(model.user_id),
            swiped_user_id: UserId::new(model.swiped_user_id),
            is_liked: model.is_liked,
            created_at: model.created_at,
        }
    }
}
