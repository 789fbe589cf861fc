//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod account;
pub mod admin;
pub mod discovery;
pub mod health;
pub mod profile;
pub mod swipes;
