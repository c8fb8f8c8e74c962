//! SQLite storage implementation for Cost Manager.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `costmanager-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for users and costs
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist; `core` is database-agnostic and works with traits.

pub mod costs;
pub mod db;
pub mod errors;
pub mod schema;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from costmanager-core for convenience
pub use costmanager_core::errors::{DatabaseError, Error, Result};
