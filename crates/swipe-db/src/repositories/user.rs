//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};

use swipe_core::discovery::CandidateQuery;
use swipe_core::entities::{Candidate, User};
use swipe_core::error::DomainError;
use swipe_core::traits::{RepoResult, UserRepository};
use swipe_core::value_objects::UserId;

use crate::models::{CandidateRow, UserModel};

use super::candidates::build_candidate_query;
use super::error::{map_db_error, map_unique_violation, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, is_verified, verified_at, is_active, created_at, last_login
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, is_verified, verified_at, is_active, created_at, last_login
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
            ",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, username, email, is_verified, verified_at, is_active, created_at, last_login)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.is_verified)
        .bind(user.verified_at)
        .bind(user.is_active)
        .bind(user.created_at)
        .bind(user.last_login)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |constraint| match constraint {
                Some("users_username_key") => Some(DomainError::UsernameAlreadyExists),
                Some("users_email_key") => Some(DomainError::EmailAlreadyExists),
                _ => None,
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn touch_last_login(&self, id: UserId, at: DateTime<Utc>) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users SET last_login = $2 WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_active(&self, id: UserId, active: bool) -> RepoResult<User> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users SET is_active = $2
            WHERE id = $1
            RETURNING id, username, email, is_verified, verified_at, is_active, created_at, last_login
            ",
        )
        .bind(id.into_inner())
        .bind(active)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::from).ok_or_else(|| user_not_found(id))
    }

    #[instrument(skip(self))]
    async fn mark_verified(&self, id: UserId, at: DateTime<Utc>) -> RepoResult<User> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users SET is_verified = TRUE, verified_at = COALESCE(verified_at, $2)
            WHERE id = $1
            RETURNING id, username, email, is_verified, verified_at, is_active, created_at, last_login
            ",
        )
        .bind(id.into_inner())
        .bind(at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::from).ok_or_else(|| user_not_found(id))
    }

    #[instrument(skip(self, query), fields(requester = %query.requester, filtered = query.preferences.is_some()))]
    async fn find_candidates(&self, query: &CandidateQuery) -> RepoResult<Vec<Candidate>> {
        let mut qb = build_candidate_query(query);
        let rows = qb
            .build_query_as::<CandidateRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        debug!(count = rows.len(), "Candidate rows fetched");

        Ok(rows.into_iter().map(Candidate::from).collect())
    }
}
