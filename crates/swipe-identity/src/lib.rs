//! # swipe-identity
//!
//! Identity provider adapters for account creation, login, and token checks.
//!
//! ## Features
//!
//! - **Keycloak**: Admin REST API for accounts, OpenID Connect token endpoints
//!   for login and introspection
//! - **Local**: In-process accounts with argon2 password hashes and signed JWTs,
//!   for development and tests
//!
//! ## Example
//!
//! ```ignore
//! use swipe_identity::build_identity_provider;
//!
//! let identity = build_identity_provider(&config.identity)?;
//! let external_id = identity.create_account("alice", None).await?;
//! identity.set_credential(&external_id, "Secret123").await?;
//! let token = identity.authenticate("alice", "Secret123").await?;
//! ```

pub mod keycloak;
pub mod local;

use std::sync::Arc;

use swipe_common::IdentityConfig;
use swipe_core::traits::{IdentityProvider, IdentityResult};

pub use keycloak::KeycloakIdentityProvider;
pub use local::LocalIdentityProvider;

/// Shared handle to the configured identity provider
pub type SharedIdentityProvider = Arc<dyn IdentityProvider>;

/// Build the identity provider selected by configuration
pub fn build_identity_provider(config: &IdentityConfig) -> IdentityResult<SharedIdentityProvider> {
    match config {
        IdentityConfig::Local(jwt) => {
            tracing::info!(issuer = %jwt.issuer, "Using local identity provider");
            Ok(Arc::new(LocalIdentityProvider::from(jwt)))
        }
        IdentityConfig::Keycloak(keycloak) => {
            tracing::info!(url = %keycloak.url, realm = %keycloak.realm, "Using Keycloak identity provider");
            Ok(Arc::new(KeycloakIdentityProvider::new(keycloak)?))
        }
    }
}
