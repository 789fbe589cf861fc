//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use swipe_core::entities::{Candidate, Preferences, Profile, Swipe, User};

use super::responses::{
    CandidateResponse, PreferencesResponse, ProfileResponse, SwipeResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            is_verified: user.is_verified,
            is_active: user.is_active,
            verified_at: user.verified_at,
            last_login: user.last_login,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Profile / Preferences Mappers
// ============================================================================

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            user_id: profile.user_id.to_string(),
            full_name: profile.full_name.clone(),
            date_of_birth: profile.date_of_birth,
            age: profile.age(),
            religion: profile.religion.clone(),
            gender: profile.gender.clone(),
            country: profile.country.clone(),
            city: profile.city.clone(),
            picture: profile.picture.clone(),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self::from(&profile)
    }
}

impl From<&Preferences> for PreferencesResponse {
    fn from(prefs: &Preferences) -> Self {
        Self {
            id: prefs.id.to_string(),
            user_id: prefs.user_id.to_string(),
            min_age: prefs.min_age,
            max_age: prefs.max_age,
            religion: prefs.religion.clone(),
            gender: prefs.gender.clone(),
            country: prefs.country.clone(),
            city: prefs.city.clone(),
            created_at: prefs.created_at,
            updated_at: prefs.updated_at,
        }
    }
}

impl From<Preferences> for PreferencesResponse {
    fn from(prefs: Preferences) -> Self {
        Self::from(&prefs)
    }
}

// ============================================================================
// Discovery / Swipe Mappers
// ============================================================================

impl From<Candidate> for CandidateResponse {
    fn from(candidate: Candidate) -> Self {
        Self {
            id: candidate.user.id.to_string(),
            username: candidate.user.username,
            is_verified: candidate.user.is_verified,
            profile: candidate.profile.as_ref().map(ProfileResponse::from),
        }
    }
}

impl From<&Swipe> for SwipeResponse {
    fn from(swipe: &Swipe) -> Self {
        Self {
            id: swipe.id.to_string(),
            user_id: swipe.user_id.to_string(),
            swiped_user_id: swipe.swiped_user_id.to_string(),
            is_liked: swipe.is_liked,
            created_at: swipe.created_at,
        }
    }
}

impl From<Swipe> for SwipeResponse {
    fn from(swipe: Swipe) -> Self {
        Self::from(&swipe)
    }
}
