//! Candidate row -> entity mapper

use swipe_core::entities::{Candidate, Profile, User};
use swipe_core::value_objects::UserId;

use crate::models::CandidateRow;

impl From<CandidateRow> for Candidate {
    fn from(row: CandidateRow) -> Self {
        let id = UserId::new(row.id);

        let profile = match (
            row.profile_id,
            row.date_of_birth,
            row.profile_created_at,
            row.profile_updated_at,
        ) {
            (Some(profile_id), Some(date_of_birth), Some(created_at), Some(updated_at)) => {
                Some(Profile {
                    id: profile_id,
                    user_id: id,
                    full_name: row.full_name,
                    date_of_birth,
                    religion: row.religion,
                    gender: row.gender,
                    country: row.country,
                    city: row.city,
                    picture: row.picture,
                    created_at,
                    updated_at,
                })
            }
            _ => None,
        };

        let user = User {
            id,
            username: row.username,
            email: row.email,
            is_verified: row.is_verified,
            verified_at: row.verified_at,
            is_active: row.is_active,
            created_at: row.created_at,
            last_login: row.last_login,
        };

        Candidate::new(user, profile)
    }
}
