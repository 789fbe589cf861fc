//! Candidate discovery
//!
//! Computes the users a requester may swipe on next:
//! 1. load the requester (must exist) and their preferences, if any
//! 2. exclude self, inactive users and everyone already swiped on
//! 3. narrow by the preference filter when preferences exist
//! 4. clip the requested page to the requester's quota
//!
//! Steps 2 and 3 run in the repository as one read. Nothing here retries; a
//! storage failure fails the whole call.

use chrono::{Datelike, Utc};
use tracing::{debug, instrument};

use swipe_core::discovery::{CandidateQuery, PreferenceFilter};
use swipe_core::entities::Candidate;
use swipe_core::error::DomainError;
use swipe_core::value_objects::{CandidatePage, UserId};

use crate::dto::{CandidateResponse, PaginatedResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Discovery service
pub struct DiscoveryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DiscoveryService<'a> {
    /// Create a new DiscoveryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every candidate the requester's quota allows, in id order
    pub async fn find_candidates(&self, user_id: UserId) -> ServiceResult<Vec<Candidate>> {
        self.find_candidates_at(user_id, CandidatePage::all(), Utc::now().year())
            .await
    }

    /// One page of candidates for the API
    ///
    /// The reported limit is the size left after the quota cut, and
    /// `quota_reached` tells a client that later pages will stay empty
    /// because of its quota rather than a lack of candidates.
    #[instrument(skip(self))]
    pub async fn find_candidates_page(
        &self,
        user_id: UserId,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> ServiceResult<PaginatedResponse<CandidateResponse>> {
        let page = self.ctx.page_limits().page(offset, limit);
        let (candidates, served) = self.discover(user_id, page, Utc::now().year()).await?;

        let served_limit = served.limit.unwrap_or(candidates.len() as i64);
        Ok(PaginatedResponse::new(
            candidates.into_iter().map(CandidateResponse::from).collect(),
            served.offset,
            served_limit,
        )
        .with_quota_reached(served.quota_reached))
    }

    /// Candidates for `page`, with age preferences evaluated in `current_year`
    pub async fn find_candidates_at(
        &self,
        user_id: UserId,
        page: CandidatePage,
        current_year: i32,
    ) -> ServiceResult<Vec<Candidate>> {
        let (candidates, _) = self.discover(user_id, page, current_year).await?;
        Ok(candidates)
    }

    #[instrument(skip(self, page), fields(offset = page.offset, limit = ?page.limit))]
    async fn discover(
        &self,
        user_id: UserId,
        page: CandidatePage,
        current_year: i32,
    ) -> ServiceResult<(Vec<Candidate>, ServedPage)> {
        let (user, preferences) = futures::try_join!(
            self.ctx.user_repo().find_by_id(user_id),
            self.ctx.preferences_repo().find_by_user(user_id),
        )?;
        let user = user.ok_or(DomainError::UserNotFound(user_id))?;

        let quota = self.ctx.quota();
        let served = ServedPage::new(page, quota.cap_for(user.is_verified));

        let Some(window) = quota.clip(user.is_verified, page) else {
            debug!(verified = user.is_verified, "Requested page is past the quota");
            return Ok((Vec::new(), served));
        };

        let filter = preferences
            .as_ref()
            .map(|prefs| PreferenceFilter::from_preferences(prefs, current_year));

        let query = CandidateQuery::new(user_id, filter, window);
        let candidates = self.ctx.user_repo().find_candidates(&query).await?;

        debug!(
            count = candidates.len(),
            filtered = query.preferences.is_some(),
            verified = user.is_verified,
            quota_reached = served.quota_reached,
            "Candidates found"
        );
        Ok((candidates, served))
    }
}

/// The page actually served after the quota cut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ServedPage {
    offset: i64,
    /// `Some(0)` past the quota; `None` for an unbounded page without a cap
    limit: Option<i64>,
    /// The quota ends at or before the end of the requested page
    quota_reached: bool,
}

impl ServedPage {
    fn new(requested: CandidatePage, cap: Option<i64>) -> Self {
        let offset = requested.offset.max(0);
        let wanted = requested.limit.map(|l| l.max(0));

        let Some(cap) = cap else {
            return Self {
                offset,
                limit: wanted,
                quota_reached: false,
            };
        };

        let remaining = (cap - offset).max(0);
        Self {
            offset,
            limit: Some(wanted.map_or(remaining, |l| l.min(remaining))),
            quota_reached: wanted.is_none_or(|l| offset.saturating_add(l) >= cap),
        }
    }
}
