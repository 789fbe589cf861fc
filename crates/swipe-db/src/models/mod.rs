//! Database models - SQLx-compatible structs for PostgreSQL tables

mod candidate;
mod preferences;
mod profile;
mod swipe;
mod user;

pub use candidate::CandidateRow;
pub use preferences::PreferencesModel;
pub use profile::ProfileModel;
pub use swipe::SwipeModel;
pub use user::UserModel;
