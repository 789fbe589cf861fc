//! # swipe-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services depend only on the ports in `swipe-core`; the API wires in the
//! Postgres repositories and the configured identity provider.

pub mod dto;
pub mod services;

pub use services::{
    AccountService, DiscoveryService, PageLimits, ProfileService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, SwipeService,
};
