//! Swipe service
//!
//! Records like/pass decisions. Swipes are append-only: repeating a swipe on
//! the same target adds another row. Existence of both users is enforced by
//! the repository, not checked here.

use chrono::Utc;
use tracing::{info, instrument};

use swipe_core::entities::Swipe;
use swipe_core::error::DomainError;
use swipe_core::value_objects::UserId;

use crate::dto::{CreateSwipeRequest, PaginatedResponse, SwipeResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Swipe service
pub struct SwipeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SwipeService<'a> {
    /// Create a new SwipeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a swipe from `actor`
    #[instrument(skip(self, request), fields(target = %request.swiped_user_id, liked = request.is_liked))]
    pub async fn record_swipe(
        &self,
        actor: UserId,
        request: CreateSwipeRequest,
    ) -> ServiceResult<SwipeResponse> {
        let started_at = Utc::now();
        let target = UserId::parse(&request.swiped_user_id).map_err(DomainError::from)?;

        let swipe = Swipe::new(actor, target, request.is_liked, started_at);
        self.ctx.swipe_repo().create(&swipe).await?;

        info!(swipe_id = %swipe.id, "Swipe recorded");
        Ok(SwipeResponse::from(&swipe))
    }

    /// The caller's swipe history, newest first
    #[instrument(skip(self))]
    pub async fn list_swipes(
        &self,
        user_id: UserId,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> ServiceResult<PaginatedResponse<SwipeResponse>> {
        let page = self.ctx.page_limits().page(offset, limit);
        let limit = page.limit.unwrap_or(self.ctx.page_limits().default_size);

        let swipes = self
            .ctx
            .swipe_repo()
            .find_by_user(user_id, page.offset, limit)
            .await?;

        Ok(PaginatedResponse::new(
            swipes.iter().map(SwipeResponse::from).collect(),
            page.offset,
            limit,
        ))
    }
}
