//! Cost Manager core - domain entities, services, and traits.
//!
//! This crate contains the business logic for the Cost Manager service.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod costs;
pub mod errors;
pub mod reports;
pub mod team;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
