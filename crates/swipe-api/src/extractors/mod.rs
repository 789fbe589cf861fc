//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and pagination.

mod admin;
mod auth;
mod pagination;
mod path;
mod validated;

pub use admin::AdminKey;
pub use auth::AuthUser;
pub use pagination::{Pagination, PaginationParams};
pub use path::UserIdPath;
pub use validated::ValidatedJson;
