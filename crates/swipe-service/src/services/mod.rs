//! Business logic services
//!
//! Each service borrows a [`ServiceContext`] and orchestrates repository and
//! identity provider calls for one area of the API.

pub mod account;
pub mod context;
pub mod discovery;
pub mod error;
pub mod profile;
pub mod swipe;

#[cfg(test)]
mod test_support;

pub use account::AccountService;
pub use context::{PageLimits, ServiceContext, ServiceContextBuilder};
pub use discovery::DiscoveryService;
pub use error::{ServiceError, ServiceResult};
pub use profile::ProfileService;
pub use swipe::SwipeService;
