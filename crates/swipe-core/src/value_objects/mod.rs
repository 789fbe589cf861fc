//! Value objects - immutable types that represent domain concepts

mod birth_window;
mod quota;
mod user_id;

pub use birth_window::BirthDateWindow;
pub use quota::{CandidatePage, DiscoveryQuota, DEFAULT_UNVERIFIED_LIMIT};
pub use user_id::{UserId, UserIdParseError};
