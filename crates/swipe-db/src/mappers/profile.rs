//! Profile entity <-> model mapper

use swipe_core::entities::Profile;
use swipe_core::value_objects::UserId;

use crate::models::ProfileModel;

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: model.id,
            user_id: UserId::new(model.user_id),
            full_name: model.full_name,
            date_of_birth: model.date_of_birth,
            religion: model.religion,
            gender: model.gender,
            country: model.country,
            city: model.city,
            picture: model.picture,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
