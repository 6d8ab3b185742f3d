//! HTTP response handling for errors

use super::types::AccessError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use tracing::{error, warn};

const GENERIC_MESSAGE: &str = "Something went wrong";

impl AccessError {
    /// Caller-facing message and optional payload for this error
    pub fn response_parts(&self) -> (String, Option<serde_json::Value>) {
        match self {
            AccessError::Unauthorized(message)
            | AccessError::Forbidden(message)
            | AccessError::NotFound(message)
            | AccessError::Conflict(message)
            | AccessError::Internal(message) => (message.clone(), None),
            AccessError::Jwt(_) => ("Unauthorized".to_string(), None),
            AccessError::PolicyLookup(_) => ("Access denied".to_string(), None),
            AccessError::BadRequest { message, data } => (message.clone(), data.clone()),
            AccessError::Validation { message, issues } => (
                message.clone(),
                Some(serde_json::to_value(issues).unwrap_or(serde_json::Value::Null)),
            ),
            _ => (GENERIC_MESSAGE.to_string(), None),
        }
    }
}

impl ResponseError for AccessError {
    fn status_code(&self) -> StatusCode {
        match self {
            AccessError::Unauthorized(_) | AccessError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AccessError::Forbidden(_) | AccessError::PolicyLookup(_) => StatusCode::FORBIDDEN,
            AccessError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AccessError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AccessError::NotFound(_) => StatusCode::NOT_FOUND,
            AccessError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        match self {
            AccessError::PolicyLookup(cause) => {
                error!(cause = %cause, "Policy lookup failed, denying request")
            }
            _ if status_code.is_server_error() => {
                error!(status = status_code.as_u16(), error = %self, "Request failed")
            }
            _ => warn!(status = status_code.as_u16(), error = %self, "Request rejected"),
        }

        let (message, data) = self.response_parts();
        HttpResponse::build(status_code).json(ErrorResponse { message, data })
    }
}

/// Uniform error body: `{message, data?}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
