//! PostgreSQL implementation of SwipeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use swipe_core::entities::Swipe;
use swipe_core::traits::{RepoResult, SwipeRepository};
use swipe_core::value_objects::UserId;

use crate::models::SwipeModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of SwipeRepository
#[derive(Clone)]
pub struct PgSwipeRepository {
    pool: PgPool,
}

impl PgSwipeRepository {
    /// Create a new PgSwipeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SwipeRepository for PgSwipeRepository {
    #[instrument(skip(self, swipe), fields(user_id = %swipe.user_id, target = %swipe.swiped_user_id))]
    async fn create(&self, swipe: &Swipe) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO swipes (id, user_id, swiped_user_id, is_liked, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(swipe.id)
        .bind(swipe.user_id.into_inner())
        .bind(swipe.swiped_user_id.into_inner())
        .bind(swipe.is_liked)
        .bind(swipe.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, |constraint| match constraint {
                Some("swipes_swiped_user_id_fkey") => swipe.swiped_user_id,
                _ => swipe.user_id,
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_user(
        &self,
        user_id: UserId,
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<Swipe>> {
        let rows = sqlx::query_as::<_, SwipeModel>(
            r"
            SELECT id, user_id, swiped_user_id, is_liked, created_at
            FROM swipes
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            OFFSET $2
            LIMIT $3
            ",
        )
        .bind(user_id.into_inner())
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Swipe::from).collect())
    }
}
