//! Helper functions for creating specific error types

use super::types::{AccessError, ValidationIssue};

impl AccessError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn policy_lookup<S: Into<String>>(message: S) -> Self {
        Self::PolicyLookup(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
            data: None,
        }
    }

    pub fn bad_request_with_data<S: Into<String>>(message: S, data: serde_json::Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn validation<S: Into<String>>(message: S, issues: Vec<ValidationIssue>) -> Self {
        Self::Validation {
            message: message.into(),
            issues,
        }
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the error terminates the request before any handler ran
    pub fn is_access_rejection(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized(_) | Self::Forbidden(_) | Self::PolicyLookup(_)
        )
    }
}
