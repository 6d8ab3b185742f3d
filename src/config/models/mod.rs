//! Configuration data models
//!
//! This module defines all configuration structures used by the access service.

#![allow(missing_docs)]

pub mod auth;
pub mod logging;
pub mod server;
pub mod service;
pub mod storage;

pub use auth::*;
pub use logging::*;
pub use server::*;
pub use service::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    10 * 1024 * 1024 // 10MB
}

pub fn default_database_url() -> String {
    "sqlite://data/eztest.db?mode=rwc".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_acquire_timeout() -> u64 {
    30
}

pub fn default_jwt_expiration() -> u64 {
    30 * 24 * 60 * 60 // 30 days, same as the web session
}

pub fn default_jwt_issuer() -> String {
    "eztest".to_string()
}

pub fn default_session_cookie_name() -> String {
    "session".to_string()
}

pub fn default_lookup_timeout_ms() -> u64 {
    5000
}

pub fn default_log_filter() -> String {
    "info".to_string()
}
