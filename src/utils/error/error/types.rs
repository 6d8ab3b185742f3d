//! Error types for the access service

use serde::Serialize;
use thiserror::Error;

/// Result type alias for the access service
pub type Result<T> = std::result::Result<T, AccessError>;

/// A single schema-validation failure reported back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Dotted path of the offending field
    pub path: String,
    /// Human readable description
    pub message: String,
}

impl ValidationIssue {
    pub fn new<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Main error type for the access service
#[derive(Error, Debug)]
pub enum AccessError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JWT errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// No caller identity could be resolved
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Identity resolved but the privilege is insufficient
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The policy tables could not be read; the request is denied
    #[error("Policy lookup failed: {0}")]
    PolicyLookup(String),

    /// Malformed or invalid input
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        data: Option<serde_json::Value>,
    },

    /// Input failed schema validation
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        issues: Vec<ValidationIssue>,
    },

    /// Referenced entity is absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Uniqueness or state conflict
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
