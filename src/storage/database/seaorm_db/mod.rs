// Module declarations
mod connection;
mod policy_ops;
mod project_ops;
mod seed_ops;
mod session_ops;
mod types;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase, SeedReport};
