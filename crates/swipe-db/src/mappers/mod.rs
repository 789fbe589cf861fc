//! Entity to model mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects
//! (swipe-core). Writes bind entity fields directly.

mod candidate;
mod preferences;
mod profile;
mod swipe;
mod user;
