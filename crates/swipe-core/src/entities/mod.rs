//! Domain entities - core business objects

mod candidate;
mod preferences;
mod profile;
mod swipe;
mod user;

pub use candidate::Candidate;
pub use preferences::Preferences;
pub use profile::Profile;
pub use swipe::Swipe;
pub use user::User;
