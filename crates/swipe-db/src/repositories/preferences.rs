//! PostgreSQL implementation of PreferencesRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use swipe_core::entities::Preferences;
use swipe_core::error::DomainError;
use swipe_core::traits::{PreferencesRepository, RepoResult};
use swipe_core::value_objects::UserId;

use crate::models::PreferencesModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of PreferencesRepository
#[derive(Clone)]
pub struct PgPreferencesRepository {
    pool: PgPool,
}

impl PgPreferencesRepository {
    /// Create a new PgPreferencesRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferencesRepository for PgPreferencesRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<Preferences>> {
        let result = sqlx::query_as::<_, PreferencesModel>(
            r"
            SELECT id, user_id, min_age, max_age, religion, gender, country, city,
                   created_at, updated_at
            FROM preferences
            WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Preferences::from))
    }

    #[instrument(skip(self, preferences), fields(user_id = %preferences.user_id))]
    async fn upsert(&self, preferences: &Preferences) -> RepoResult<Preferences> {
        let model = sqlx::query_as::<_, PreferencesModel>(
            r"
            INSERT INTO preferences (id, user_id, min_age, max_age, religion, gender,
                                     country, city, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (user_id) DO UPDATE SET
                min_age = EXCLUDED.min_age,
                max_age = EXCLUDED.max_age,
                religion = EXCLUDED.religion,
                gender = EXCLUDED.gender,
                country = EXCLUDED.country,
                city = EXCLUDED.city,
                updated_at = GREATEST(EXCLUDED.updated_at, preferences.updated_at)
            RETURNING id, user_id, min_age, max_age, religion, gender, country, city,
                      created_at, updated_at
            ",
        )
        .bind(preferences.id)
        .bind(preferences.user_id.into_inner())
        .bind(preferences.min_age)
        .bind(preferences.max_age)
        .bind(&preferences.religion)
        .bind(&preferences.gender)
        .bind(&preferences.country)
        .bind(&preferences.city)
        .bind(preferences.created_at)
        .bind(preferences.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.constraint() == Some("preferences_age_range_check"))
            {
                return DomainError::InvalidArgument("invalid age range".to_string());
            }
            map_foreign_key_violation(e, |_| preferences.user_id)
        })?;

        Ok(Preferences::from(model))
    }
}
