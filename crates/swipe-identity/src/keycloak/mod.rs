//! Keycloak identity provider.
//!
//! Accounts are managed through the realm admin REST API using a
//! service-account token (client credentials grant). Logins use the
//! resource-owner password grant and tokens are checked with the
//! introspection endpoint.

mod client;
mod payloads;

pub use client::KeycloakIdentityProvider;
