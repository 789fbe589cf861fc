//! Candidate - a discoverable user together with their profile

use super::{Profile, User};

/// A user eligible to be shown to a requester.
///
/// The profile is absent when the candidate has not written one yet and the
/// requester has no preferences (preference filtering requires a profile).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub user: User,
    pub profile: Option<Profile>,
}

impl Candidate {
    pub fn new(user: User, profile: Option<Profile>) -> Self {
        Self { user, profile }
    }
}
