//! HTTP route modules

pub mod access;
pub mod auth;
pub mod health;
pub mod projects;
pub mod roles;

use actix_web::web;
use serde::Serialize;

/// Success envelope; errors use the `{message, data}` body instead
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    pub fn with_message<S: Into<String>>(data: T, message: S) -> Self {
        Self {
            data,
            message: Some(message.into()),
        }
    }
}

/// Register every route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    auth::configure_routes(cfg);
    roles::configure_routes(cfg);
    projects::configure_routes(cfg);
    access::configure_routes(cfg);
}
