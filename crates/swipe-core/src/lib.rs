//! # swipe-core
//!
//! Domain layer containing entities, value objects, discovery filters, and the
//! repository and identity ports.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod discovery;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use discovery::{CandidateQuery, PreferenceFilter};
pub use entities::{Candidate, Preferences, Profile, Swipe, User};
pub use error::DomainError;
pub use traits::{
    AccessToken, IdentityProvider, IdentityResult, PreferencesRepository, ProfileRepository,
    RepoResult, SwipeRepository, TokenIntrospection, UserRepository,
};
pub use value_objects::{
    BirthDateWindow, CandidatePage, DiscoveryQuota, UserId, UserIdParseError,
    DEFAULT_UNVERIFIED_LIMIT,
};
