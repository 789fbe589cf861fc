//! Ports implemented by infrastructure crates

mod identity;
mod repositories;

pub use identity::{AccessToken, IdentityProvider, IdentityResult, TokenIntrospection};
pub use repositories::{
    PreferencesRepository, ProfileRepository, RepoResult, SwipeRepository, UserRepository,
};
