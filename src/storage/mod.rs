//! Storage layer
//!
//! Persistence for the authorization policy, users and sessions.

/// Database storage module
pub mod database;

pub use database::{Database, DatabaseBackendType, SeedReport};
