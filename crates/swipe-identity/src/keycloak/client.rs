//! Keycloak HTTP client implementing `IdentityProvider`.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::header::LOCATION;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, instrument, warn};

use swipe_common::KeycloakConfig;
use swipe_core::error::DomainError;
use swipe_core::traits::{AccessToken, IdentityProvider, IdentityResult, TokenIntrospection};

use super::payloads::{id_from_location, Credential, IntrospectionResponse, NewUser, TokenResponse};

/// Refresh the admin token this long before Keycloak expires it
const ADMIN_TOKEN_MARGIN: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Identity provider talking to a Keycloak realm
#[derive(Debug)]
pub struct KeycloakIdentityProvider {
    http: Client,
    base_url: String,
    realm: String,
    client_id: String,
    client_secret: String,
    admin_token: Mutex<Option<CachedToken>>,
}

fn upstream(context: &str, err: impl ToString) -> DomainError {
    DomainError::UpstreamAuth(format!("{context}: {}", err.to_string()))
}

async fn unexpected(context: &str, resp: Response) -> DomainError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    warn!(%status, body = %body, "{context} failed");
    DomainError::UpstreamAuth(format!("{context}: unexpected status {status}"))
}

impl KeycloakIdentityProvider {
    /// Create a client for the configured realm
    pub fn new(config: &KeycloakConfig) -> IdentityResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| upstream("building HTTP client", e))?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            realm: config.realm.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            admin_token: Mutex::new(None),
        })
    }

    fn token_url(&self) -> String {
        format!(
            "{}/realms/{}/protocol/openid-connect/token",
            self.base_url, self.realm
        )
    }

    fn introspect_url(&self) -> String {
        format!("{}/introspect", self.token_url())
    }

    fn users_url(&self) -> String {
        format!("{}/admin/realms/{}/users", self.base_url, self.realm)
    }

    fn user_url(&self, external_id: &str) -> String {
        format!("{}/{external_id}", self.users_url())
    }

    /// Service-account token for the admin API, cached until shortly before expiry
    async fn admin_token(&self) -> IdentityResult<String> {
        let cached = self.admin_token.lock().clone();
        if let Some(cached) = cached.filter(|c| c.expires_at > Instant::now()) {
            return Ok(cached.token);
        }

        let resp = self
            .http
            .post(self.token_url())
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| upstream("admin login", e))?;

        if !resp.status().is_success() {
            return Err(unexpected("admin login", resp).await);
        }

        let token: TokenResponse = resp.json().await.map_err(|e| upstream("admin login", e))?;
        let lifetime = Duration::from_secs(token.expires_in.unwrap_or(60).max(0) as u64);
        let expires_at = Instant::now() + lifetime.saturating_sub(ADMIN_TOKEN_MARGIN);

        *self.admin_token.lock() = Some(CachedToken {
            token: token.access_token.clone(),
            expires_at,
        });

        debug!("Admin token refreshed");
        Ok(token.access_token)
    }
}

#[async_trait]
impl IdentityProvider for KeycloakIdentityProvider {
    #[instrument(skip(self, email))]
    async fn create_account(&self, username: &str, email: Option<&str>) -> IdentityResult<String> {
        let admin = self.admin_token().await?;

        let resp = self
            .http
            .post(self.users_url())
            .bearer_auth(admin)
            .json(&NewUser {
                username,
                email,
                enabled: true,
            })
            .send()
            .await
            .map_err(|e| upstream("create account", e))?;

        match resp.status() {
            StatusCode::CREATED => {}
            StatusCode::CONFLICT => return Err(DomainError::UsernameAlreadyExists),
            _ => return Err(unexpected("create account", resp).await),
        }

        let location = resp
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| upstream("create account", "missing Location header"))?;

        let external_id = id_from_location(location)
            .ok_or_else(|| upstream("create account", "malformed Location header"))?;

        debug!(external_id = %external_id, "Keycloak account created");
        Ok(external_id.to_string())
    }

    #[instrument(skip(self, secret))]
    async fn set_credential(&self, external_id: &str, secret: &str) -> IdentityResult<()> {
        let admin = self.admin_token().await?;

        let resp = self
            .http
            .put(format!("{}/reset-password", self.user_url(external_id)))
            .bearer_auth(admin)
            .json(&Credential::password(secret))
            .send()
            .await
            .map_err(|e| upstream("set password", e))?;

        if !resp.status().is_success() {
            return Err(unexpected("set password", resp).await);
        }
        Ok(())
    }

    #[instrument(skip(self, secret))]
    async fn authenticate(&self, username: &str, secret: &str) -> IdentityResult<AccessToken> {
        let resp = self
            .http
            .post(self.token_url())
            .form(&[
                ("grant_type", "password"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("username", username),
                ("password", secret),
            ])
            .send()
            .await
            .map_err(|e| upstream("login", e))?;

        match resp.status() {
            status if status.is_success() => {}
            // invalid_grant comes back as 400 or 401 depending on the Keycloak version
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => {
                return Err(DomainError::InvalidCredentials)
            }
            _ => return Err(unexpected("login", resp).await),
        }

        let token: TokenResponse = resp.json().await.map_err(|e| upstream("login", e))?;
        Ok(AccessToken {
            token: token.access_token,
            token_type: token.token_type.unwrap_or_else(|| "Bearer".to_string()),
            expires_in: token.expires_in,
        })
    }

    #[instrument(skip(self))]
    async fn delete_account(&self, external_id: &str) -> IdentityResult<()> {
        let admin = self.admin_token().await?;

        let resp = self
            .http
            .delete(self.user_url(external_id))
            .bearer_auth(admin)
            .send()
            .await
            .map_err(|e| upstream("delete account", e))?;

        match resp.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Ok(()),
            _ => Err(unexpected("delete account", resp).await),
        }
    }

    async fn validate_token(&self, token: &str) -> IdentityResult<TokenIntrospection> {
        let resp = self
            .http
            .post(self.introspect_url())
            .form(&[
                ("token", token),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| upstream("introspect", e))?;

        if !resp.status().is_success() {
            return Err(unexpected("introspect", resp).await);
        }

        let body: IntrospectionResponse =
            resp.json().await.map_err(|e| upstream("introspect", e))?;

        Ok(match (body.active, body.sub) {
            (true, Some(sub)) => TokenIntrospection::active(sub),
            _ => TokenIntrospection::inactive(),
        })
    }
}
