//! Profile and preferences service
//!
//! Both writes are full replacements keyed by user id: omitted optional
//! fields clear what was stored before.

use chrono::Utc;
use tracing::{info, instrument};

use swipe_core::entities::{Preferences, Profile};
use swipe_core::value_objects::UserId;

use crate::dto::{
    PreferencesResponse, ProfileResponse, UpsertPreferencesRequest, UpsertProfileRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create or replace the caller's profile
    #[instrument(skip(self, request))]
    pub async fn upsert_profile(
        &self,
        caller: UserId,
        target: UserId,
        request: UpsertProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        ensure_owner(caller, target, "profile")?;

        let mut profile = Profile::new(target, request.date_of_birth);
        profile.full_name = request.full_name;
        profile.religion = request.religion;
        profile.gender = request.gender;
        profile.country = request.country;
        profile.city = request.city;
        profile.picture = request.picture;

        let saved = self.ctx.profile_repo().upsert(&profile).await?;

        info!(user_id = %target, profile_id = %saved.id, "Profile saved");
        Ok(ProfileResponse::from(&saved))
    }

    /// Create or replace the caller's preferences
    #[instrument(skip(self, request))]
    pub async fn upsert_preferences(
        &self,
        caller: UserId,
        target: UserId,
        request: UpsertPreferencesRequest,
    ) -> ServiceResult<PreferencesResponse> {
        ensure_owner(caller, target, "preferences")?;

        let now = Utc::now();
        let preferences = Preferences {
            min_age: request.min_age,
            max_age: request.max_age,
            religion: request.religion,
            gender: request.gender,
            country: request.country,
            city: request.city,
            created_at: now,
            updated_at: now,
            ..Preferences::new(target)
        };
        preferences.validate_age_range()?;

        let saved = self.ctx.preferences_repo().upsert(&preferences).await?;

        info!(user_id = %target, "Preferences saved");
        Ok(PreferencesResponse::from(&saved))
    }
}

fn ensure_owner(caller: UserId, target: UserId, what: &str) -> ServiceResult<()> {
    if caller == target {
        Ok(())
    } else {
        Err(ServiceError::forbidden(format!(
            "cannot modify another user's {what}"
        )))
    }
}
