//! Path parameter extractors

use serde::Deserialize;
use swipe_core::UserId;

use crate::response::ApiError;

/// Path parameters with a user id
#[derive(Debug, Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as a UUID
    pub fn user_id(&self) -> Result<UserId, ApiError> {
        UserId::parse(&self.user_id).map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}
