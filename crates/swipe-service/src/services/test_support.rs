//! In-memory repositories and identity provider for service tests

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use swipe_core::discovery::CandidateQuery;
use swipe_core::entities::{Candidate, Preferences, Profile, Swipe, User};
use swipe_core::error::DomainError;
use swipe_core::traits::{
    AccessToken, IdentityProvider, IdentityResult, PreferencesRepository, ProfileRepository,
    RepoResult, SwipeRepository, TokenIntrospection, UserRepository,
};
use swipe_core::value_objects::{DiscoveryQuota, UserId};

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    profiles: HashMap<UserId, Profile>,
    preferences: HashMap<UserId, Preferences>,
    swipes: Vec<Swipe>,
}

/// Single store implementing all four repositories
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self, id: UserId) -> Option<User> {
        self.tables.lock().users.get(&id).cloned()
    }

    pub fn insert_user(&self, user: User) {
        self.tables.lock().users.insert(user.id, user);
    }

    pub fn insert_profile(&self, profile: Profile) {
        self.tables.lock().profiles.insert(profile.user_id, profile);
    }

    pub fn insert_preferences(&self, prefs: Preferences) {
        self.tables.lock().preferences.insert(prefs.user_id, prefs);
    }

    pub fn swipe_count(&self) -> usize {
        self.tables.lock().swipes.len()
    }

    pub fn profile_count(&self) -> usize {
        self.tables.lock().profiles.len()
    }
}

fn update_user<F>(store: &MemoryStore, id: UserId, f: F) -> RepoResult<User>
where
    F: FnOnce(&mut User),
{
    let mut tables = store.tables.lock();
    let user = tables
        .users
        .get_mut(&id)
        .ok_or(DomainError::UserNotFound(id))?;
    f(user);
    Ok(user.clone())
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.user(id))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .tables
            .lock()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(DomainError::UsernameAlreadyExists);
        }
        tables.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn touch_last_login(&self, id: UserId, at: DateTime<Utc>) -> RepoResult<()> {
        update_user(self, id, |u| u.record_login(at)).map(|_| ())
    }

    async fn set_active(&self, id: UserId, active: bool) -> RepoResult<User> {
        update_user(self, id, |u| u.is_active = active)
    }

    async fn mark_verified(&self, id: UserId, at: DateTime<Utc>) -> RepoResult<User> {
        update_user(self, id, |u| {
            if !u.is_verified {
                u.mark_verified(at);
            }
        })
    }

    async fn find_candidates(&self, query: &CandidateQuery) -> RepoResult<Vec<Candidate>> {
        let tables = self.tables.lock();
        let swiped: HashSet<UserId> = tables
            .swipes
            .iter()
            .filter(|s| s.user_id == query.requester)
            .map(|s| s.swiped_user_id)
            .collect();

        let mut users: Vec<&User> = tables.users.values().collect();
        users.sort_by_key(|u| u.id);

        let offset = usize::try_from(query.page.offset).unwrap_or(0);
        let limit = query
            .page
            .limit
            .map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(0));

        Ok(users
            .into_iter()
            .filter(|u| query.admits(u, tables.profiles.get(&u.id), &swiped))
            .skip(offset)
            .take(limit)
            .map(|u| Candidate::new(u.clone(), tables.profiles.get(&u.id).cloned()))
            .collect())
    }
}

#[async_trait]
impl ProfileRepository for MemoryStore {
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<Profile>> {
        Ok(self.tables.lock().profiles.get(&user_id).cloned())
    }

    async fn upsert(&self, profile: &Profile) -> RepoResult<Profile> {
        let mut tables = self.tables.lock();
        if !tables.users.contains_key(&profile.user_id) {
            return Err(DomainError::UserNotFound(profile.user_id));
        }

        let mut stored = profile.clone();
        if let Some(existing) = tables.profiles.get(&profile.user_id) {
            stored.id = existing.id;
            stored.created_at = existing.created_at;
            stored.updated_at = stored.updated_at.max(existing.updated_at);
        }
        tables.profiles.insert(stored.user_id, stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl PreferencesRepository for MemoryStore {
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Option<Preferences>> {
        Ok(self.tables.lock().preferences.get(&user_id).cloned())
    }

    async fn upsert(&self, preferences: &Preferences) -> RepoResult<Preferences> {
        let mut tables = self.tables.lock();
        if !tables.users.contains_key(&preferences.user_id) {
            return Err(DomainError::UserNotFound(preferences.user_id));
        }

        let mut stored = preferences.clone();
        if let Some(existing) = tables.preferences.get(&preferences.user_id) {
            stored.id = existing.id;
            stored.created_at = existing.created_at;
            stored.updated_at = stored.updated_at.max(existing.updated_at);
        }
        tables.preferences.insert(stored.user_id, stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl SwipeRepository for MemoryStore {
    async fn create(&self, swipe: &Swipe) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        for id in [swipe.user_id, swipe.swiped_user_id] {
            if !tables.users.contains_key(&id) {
                return Err(DomainError::UserNotFound(id));
            }
        }
        tables.swipes.push(swipe.clone());
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: UserId,
        offset: i64,
        limit: i64,
    ) -> RepoResult<Vec<Swipe>> {
        let tables = self.tables.lock();
        let mut swipes: Vec<Swipe> = tables
            .swipes
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        swipes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(swipes
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .collect())
    }
}

/// User repository whose `create` always fails; everything else delegates
pub struct FailingSaveStore {
    inner: MemoryStore,
}

impl FailingSaveStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl UserRepository for FailingSaveStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        self.inner.find_by_username(username).await
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        self.inner.username_exists(username).await
    }

    async fn create(&self, _user: &User) -> RepoResult<()> {
        Err(DomainError::DatabaseError("connection reset".to_string()))
    }

    async fn touch_last_login(&self, id: UserId, at: DateTime<Utc>) -> RepoResult<()> {
        self.inner.touch_last_login(id, at).await
    }

    async fn set_active(&self, id: UserId, active: bool) -> RepoResult<User> {
        self.inner.set_active(id, active).await
    }

    async fn mark_verified(&self, id: UserId, at: DateTime<Utc>) -> RepoResult<User> {
        self.inner.mark_verified(id, at).await
    }

    async fn find_candidates(&self, query: &CandidateQuery) -> RepoResult<Vec<Candidate>> {
        self.inner.find_candidates(query).await
    }
}

#[derive(Default)]
struct IdentityState {
    // external id -> (username, password)
    accounts: HashMap<String, (String, Option<String>)>,
    deleted: usize,
}

/// Identity provider with plaintext credentials and `token-<id>` tokens
#[derive(Clone, Default)]
pub struct FakeIdentity {
    state: Arc<Mutex<IdentityState>>,
}

impl FakeIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_count(&self) -> usize {
        self.state.lock().accounts.len()
    }

    pub fn deleted_count(&self) -> usize {
        self.state.lock().deleted
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn create_account(&self, username: &str, _email: Option<&str>) -> IdentityResult<String> {
        let mut state = self.state.lock();
        if state.accounts.values().any(|(name, _)| name == username) {
            return Err(DomainError::UsernameAlreadyExists);
        }
        let id = Uuid::new_v4().to_string();
        state.accounts.insert(id.clone(), (username.to_string(), None));
        Ok(id)
    }

    async fn set_credential(&self, external_id: &str, secret: &str) -> IdentityResult<()> {
        let mut state = self.state.lock();
        let account = state
            .accounts
            .get_mut(external_id)
            .ok_or_else(|| DomainError::UpstreamAuth("unknown account".to_string()))?;
        account.1 = Some(secret.to_string());
        Ok(())
    }

    async fn authenticate(&self, username: &str, secret: &str) -> IdentityResult<AccessToken> {
        let state = self.state.lock();
        state
            .accounts
            .iter()
            .find(|(_, (name, password))| name == username && password.as_deref() == Some(secret))
            .map(|(id, _)| AccessToken::bearer(format!("token-{id}"), Some(300)))
            .ok_or(DomainError::InvalidCredentials)
    }

    async fn delete_account(&self, external_id: &str) -> IdentityResult<()> {
        let mut state = self.state.lock();
        if state.accounts.remove(external_id).is_some() {
            state.deleted += 1;
        }
        Ok(())
    }

    async fn validate_token(&self, token: &str) -> IdentityResult<TokenIntrospection> {
        let state = self.state.lock();
        Ok(token
            .strip_prefix("token-")
            .filter(|id| state.accounts.contains_key(*id))
            .map_or_else(TokenIntrospection::inactive, |id| TokenIntrospection::active(id)))
    }
}

/// Context over one store with the default quota
pub fn context(store: &MemoryStore, identity: &FakeIdentity) -> ServiceContext {
    context_with_quota(store, identity, DiscoveryQuota::default())
}

pub fn context_with_quota(
    store: &MemoryStore,
    identity: &FakeIdentity,
    quota: DiscoveryQuota,
) -> ServiceContext {
    let shared = Arc::new(store.clone());
    ServiceContextBuilder::new()
        .user_repo(shared.clone())
        .profile_repo(shared.clone())
        .preferences_repo(shared.clone())
        .swipe_repo(shared)
        .identity(Arc::new(identity.clone()))
        .quota(quota)
        .build()
        .expect("test context")
}
