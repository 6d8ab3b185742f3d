//! Health check endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::ErrorResponse;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, error};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Health status payload
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub policy_store: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: Cow<'static, str>,
}

/// Liveness plus a policy store round trip; 503 when the store is unreachable
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let policy_store = match state.policy().ping().await {
        Ok(()) => true,
        Err(e) => {
            error!("Policy store health check failed: {}", e);
            false
        }
    };

    let health_status = HealthStatus {
        status: Cow::Borrowed(if policy_store { "healthy" } else { "unhealthy" }),
        policy_store,
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    };

    if policy_store {
        HttpResponse::Ok().json(ApiResponse::success(health_status))
    } else {
        HttpResponse::ServiceUnavailable().json(ErrorResponse {
            message: "Policy store unavailable".to_string(),
            data: serde_json::to_value(&health_status).ok(),
        })
    }
}
