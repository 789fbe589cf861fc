//! Preferences entity <-> model mapper

use swipe_core::entities::Preferences;
use swipe_core::value_objects::UserId;

use crate::models::PreferencesModel;

impl From<PreferencesModel> for Preferences {
    fn from(model: PreferencesModel) -> Self {
        Preferences {
            id: model.id,
            user_id: UserId::new(model.user_id),
            min_age: model.min_age,
            max_age: model.max_age,
            religion: model.religion,
            gender: model.gender,
            country: model.country,
            city: model.city,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
