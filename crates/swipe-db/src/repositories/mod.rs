//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in swipe-core.
//! Each repository handles database operations for a specific domain entity.

mod candidates;
mod error;
mod preferences;
mod profile;
mod swipe;
mod user;

pub use candidates::build_candidate_query;
pub use preferences::PgPreferencesRepository;
pub use profile::PgProfileRepository;
pub use swipe::PgSwipeRepository;
pub use user::PgUserRepository;
