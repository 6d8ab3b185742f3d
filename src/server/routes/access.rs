//! Access decision lookup for the calling user

use crate::auth::rbac::keywords::{actions, modules};
use crate::auth::rbac::ScopeInfo;
use crate::server::middleware::{get_user_info, AccessGate};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{AccessError, Result};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/access/{module}/{action}")
            .wrap(AccessGate::new(modules::USERS, actions::READ))
            .route(web::get().to(check_access)),
    );
}

#[derive(Debug, Serialize)]
struct AccessCheck {
    role: String,
    module: String,
    action: String,
    #[serde(flatten)]
    decision: ScopeInfo,
}

/// What the caller's role may do on `module` with `action`
async fn check_access(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let user = get_user_info(&req)?;
    let (module, action) = path.into_inner();
    if module.trim().is_empty() || action.trim().is_empty() {
        return Err(AccessError::bad_request("Module and action are required"));
    }

    let decision = state.resolver.resolve(&user.role, &module, &action).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(AccessCheck {
        role: user.role.to_lowercase(),
        module,
        action,
        decision,
    })))
}
