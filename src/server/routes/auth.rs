//! Bearer token issuance for logged-in sessions

use crate::auth::AuthMethod;
use crate::server::middleware::{bounded, extract_auth_method};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{AccessError, Result};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use tracing::info;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/auth/token", web::get().to(issue_token));
}

/// Token payload handed to SDK and API clients
#[derive(Debug, Serialize)]
pub struct TokenGrant {
    pub token: String,
    /// Seconds until the token expires
    pub expires_in: u64,
}

/// Exchange the session cookie for a bearer token
///
/// Only a live session qualifies; a bearer token cannot mint another one.
async fn issue_token(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let auth = state.config.auth();
    let session = match extract_auth_method(req.headers(), &auth.session_cookie_name) {
        method @ AuthMethod::Session(_) => method,
        _ => return Err(AccessError::unauthorized("Unauthorized - Please log in first")),
    };

    let user = bounded(auth.lookup_timeout(), "identity", state.identity.resolve(&session))
        .await?
        .ok_or_else(|| AccessError::unauthorized("Unauthorized - Please log in first"))?;
    if !user.has_role() {
        return Err(AccessError::unauthorized("No Access"));
    }

    let jwt = state.identity.jwt();
    let token = jwt.create_token(&user)?;
    info!(user_id = %user.id, "Issued bearer token");

    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        TokenGrant {
            token,
            expires_in: jwt.expiration(),
        },
        "Use this token in Authorization: Bearer <token> header",
    )))
}
