//! Service context - dependency container for services
//!
//! Holds the repositories, the identity provider and the discovery limits
//! needed by services. Everything is passed in explicitly; services read no
//! ambient configuration.

use std::sync::Arc;

use swipe_common::DiscoveryConfig;
use swipe_core::traits::{
    IdentityProvider, PreferencesRepository, ProfileRepository, SwipeRepository, UserRepository,
};
use swipe_core::value_objects::{CandidatePage, DiscoveryQuota};

use super::error::{ServiceError, ServiceResult};

/// Page sizes for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: i64,
    pub max_size: i64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: 20,
            max_size: 100,
        }
    }
}

impl PageLimits {
    /// Resolve optional offset/limit query values into a page
    pub fn page(&self, offset: Option<i64>, limit: Option<i64>) -> CandidatePage {
        CandidatePage::new(offset.unwrap_or(0), self.clamp(limit))
    }

    /// Page size in `[1, max_size]`; a max below one still yields pages of one
    pub fn clamp(&self, limit: Option<i64>) -> i64 {
        limit
            .unwrap_or(self.default_size)
            .clamp(1, self.max_size.max(1))
    }
}

impl From<&DiscoveryConfig> for PageLimits {
    fn from(config: &DiscoveryConfig) -> Self {
        Self {
            default_size: config.default_page_size,
            max_size: config.max_page_size,
        }
    }
}

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories for users, profiles, preferences and swipes
/// - The identity provider used by signup, login and token checks
/// - The discovery quota and page limits
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    preferences_repo: Arc<dyn PreferencesRepository>,
    swipe_repo: Arc<dyn SwipeRepository>,

    // Identity
    identity: Arc<dyn IdentityProvider>,

    // Discovery
    quota: DiscoveryQuota,
    page_limits: PageLimits,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        preferences_repo: Arc<dyn PreferencesRepository>,
        swipe_repo: Arc<dyn SwipeRepository>,
        identity: Arc<dyn IdentityProvider>,
        quota: DiscoveryQuota,
        page_limits: PageLimits,
    ) -> Self {
        Self {
            user_repo,
            profile_repo,
            preferences_repo,
            swipe_repo,
            identity,
            quota,
            page_limits,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the preferences repository
    pub fn preferences_repo(&self) -> &dyn PreferencesRepository {
        self.preferences_repo.as_ref()
    }

    /// Get the swipe repository
    pub fn swipe_repo(&self) -> &dyn SwipeRepository {
        self.swipe_repo.as_ref()
    }

    // === Identity ===

    /// Get the identity provider
    pub fn identity(&self) -> &dyn IdentityProvider {
        self.identity.as_ref()
    }

    // === Discovery ===

    /// Result cap policy for discovery
    pub fn quota(&self) -> DiscoveryQuota {
        self.quota
    }

    /// Page size defaults and bounds
    pub fn page_limits(&self) -> PageLimits {
        self.page_limits
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("identity", &"dyn IdentityProvider")
            .field("quota", &self.quota)
            .field("page_limits", &self.page_limits)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    preferences_repo: Option<Arc<dyn PreferencesRepository>>,
    swipe_repo: Option<Arc<dyn SwipeRepository>>,
    identity: Option<Arc<dyn IdentityProvider>>,
    quota: DiscoveryQuota,
    page_limits: PageLimits,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn preferences_repo(mut self, repo: Arc<dyn PreferencesRepository>) -> Self {
        self.preferences_repo = Some(repo);
        self
    }

    pub fn swipe_repo(mut self, repo: Arc<dyn SwipeRepository>) -> Self {
        self.swipe_repo = Some(repo);
        self
    }

    pub fn identity(mut self, identity: Arc<dyn IdentityProvider>) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn quota(mut self, quota: DiscoveryQuota) -> Self {
        self.quota = quota;
        self
    }

    pub fn page_limits(mut self, limits: PageLimits) -> Self {
        self.page_limits = limits;
        self
    }

    /// Set quota and page limits from discovery configuration
    pub fn discovery(self, config: &DiscoveryConfig) -> Self {
        self.quota(config.quota()).page_limits(PageLimits::from(config))
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.profile_repo.ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.preferences_repo
                .ok_or_else(|| ServiceError::validation("preferences_repo is required"))?,
            self.swipe_repo.ok_or_else(|| ServiceError::validation("swipe_repo is required"))?,
            self.identity.ok_or_else(|| ServiceError::validation("identity is required"))?,
            self.quota,
            self.page_limits,
        ))
    }
}
