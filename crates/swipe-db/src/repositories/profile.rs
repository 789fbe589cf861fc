//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use swipe_core::entities::Profile;
use swipe_core::traits::{ProfileRepository, RepoResult};
use swipe_core::value_objects::UserId;

use crate::models::ProfileModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT id, user_id, full_name, date_of_birth, religion, gender, country, city,
                   picture, created_at, updated_at
            FROM profiles
            WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self, profile), fields(user_id = %profile.user_id))]
    async fn upsert(&self, profile: &Profile) -> RepoResult<Profile> {
        let model = sqlx::query_as::<_, ProfileModel>(
            r"
            INSERT INTO profiles (id, user_id, full_name, date_of_birth, religion, gender,
                                  country, city, picture, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (user_id) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                date_of_birth = EXCLUDED.date_of_birth,
                religion = EXCLUDED.religion,
                gender = EXCLUDED.gender,
                country = EXCLUDED.country,
                city = EXCLUDED.city,
                picture = EXCLUDED.picture,
                updated_at = GREATEST(EXCLUDED.updated_at, profiles.updated_at)
            RETURNING id, user_id, full_name, date_of_birth, religion, gender, country, city,
                      picture, created_at, updated_at
            ",
        )
        .bind(profile.id)
        .bind(profile.user_id.into_inner())
        .bind(&profile.full_name)
        .bind(profile.date_of_birth)
        .bind(&profile.religion)
        .bind(&profile.gender)
        .bind(&profile.country)
        .bind(&profile.city)
        .bind(&profile.picture)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, |_| profile.user_id))?;

        Ok(Profile::from(model))
    }
}
