//! Database storage implementation using SeaORM
//!
//! Holds the policy tables the permission resolver reads, the user and
//! session tables behind logins, and the projects listings are scoped over.

/// Database entities module
pub mod entities;
/// Database migration module
pub mod migration;
/// SeaORM database implementation module
pub mod seaorm_db;

// Re-export the main database interface
pub use seaorm_db::SeaOrmDatabase as Database;
pub use seaorm_db::{DatabaseBackendType, SeedReport};
