//! Local identity provider backed by in-memory accounts.
//!
//! Accounts live in a `DashMap` keyed by external id, with a username index.
//! Passwords are stored as argon2 hashes and access tokens are JWTs signed
//! with the configured secret. State is lost on restart.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, instrument};
use uuid::Uuid;

use swipe_common::{hash_password, verify_password, AppError, JwtConfig, JwtService};
use swipe_core::error::DomainError;
use swipe_core::traits::{AccessToken, IdentityProvider, IdentityResult, TokenIntrospection};

#[derive(Debug, Clone)]
struct LocalAccount {
    username: String,
    password_hash: Option<String>,
}

/// Identity provider keeping accounts in process memory
#[derive(Debug)]
pub struct LocalIdentityProvider {
    jwt: JwtService,
    accounts: DashMap<String, LocalAccount>,
    usernames: DashMap<String, String>,
}

impl LocalIdentityProvider {
    /// Create a provider issuing tokens with the given JWT service
    #[must_use]
    pub fn new(jwt: JwtService) -> Self {
        Self {
            jwt,
            accounts: DashMap::new(),
            usernames: DashMap::new(),
        }
    }

    /// Number of registered accounts
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

impl From<&JwtConfig> for LocalIdentityProvider {
    fn from(config: &JwtConfig) -> Self {
        Self::new(JwtService::new(
            &config.secret,
            config.access_token_expiry,
            config.issuer.clone(),
        ))
    }
}

fn internal(e: &AppError) -> DomainError {
    DomainError::InternalError(e.to_string())
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    #[instrument(skip(self, email))]
    async fn create_account(&self, username: &str, email: Option<&str>) -> IdentityResult<String> {
        let external_id = Uuid::new_v4().to_string();

        match self.usernames.entry(username.to_string()) {
            Entry::Occupied(_) => return Err(DomainError::UsernameAlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(external_id.clone());
            }
        }

        self.accounts.insert(
            external_id.clone(),
            LocalAccount {
                username: username.to_string(),
                password_hash: None,
            },
        );

        debug!(external_id = %external_id, "Local account created");
        Ok(external_id)
    }

    #[instrument(skip(self, secret))]
    async fn set_credential(&self, external_id: &str, secret: &str) -> IdentityResult<()> {
        let hash = hash_password(secret).map_err(|e| internal(&e))?;

        let mut account = self
            .accounts
            .get_mut(external_id)
            .ok_or_else(|| DomainError::UpstreamAuth(format!("unknown account {external_id}")))?;
        account.password_hash = Some(hash);

        Ok(())
    }

    #[instrument(skip(self, secret))]
    async fn authenticate(&self, username: &str, secret: &str) -> IdentityResult<AccessToken> {
        let external_id = self
            .usernames
            .get(username)
            .map(|id| id.value().clone())
            .ok_or(DomainError::InvalidCredentials)?;

        let password_hash = self
            .accounts
            .get(&external_id)
            .and_then(|account| account.password_hash.clone())
            .ok_or(DomainError::InvalidCredentials)?;

        if !verify_password(secret, &password_hash).map_err(|e| internal(&e))? {
            return Err(DomainError::InvalidCredentials);
        }

        let issued = self.jwt.issue(&external_id).map_err(|e| internal(&e))?;
        Ok(AccessToken::bearer(issued.access_token, Some(issued.expires_in)))
    }

    #[instrument(skip(self))]
    async fn delete_account(&self, external_id: &str) -> IdentityResult<()> {
        if let Some((_, account)) = self.accounts.remove(external_id) {
            self.usernames.remove(&account.username);
            debug!(external_id = %external_id, "Local account deleted");
        }
        Ok(())
    }

    async fn validate_token(&self, token: &str) -> IdentityResult<TokenIntrospection> {
        let Ok(claims) = self.jwt.decode_token(token) else {
            return Ok(TokenIntrospection::inactive());
        };

        // Tokens outlive deleted accounts; those no longer authenticate
        if !self.accounts.contains_key(&claims.sub) {
            return Ok(TokenIntrospection::inactive());
        }

        Ok(TokenIntrospection::active(claims.sub))
    }
}
