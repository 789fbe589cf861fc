//! In-process identity provider.

mod provider;

pub use provider::LocalIdentityProvider;
