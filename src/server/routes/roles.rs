//! Role and privilege listing

use crate::auth::rbac::keywords::{actions, modules};
use crate::server::middleware::AccessGate;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{AccessError, Result};
use actix_web::{HttpResponse, web};
use serde::Serialize;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/roles")
            .wrap(AccessGate::new(modules::USERS, actions::READ))
            .route("", web::get().to(list_roles))
            .route("/{keyword}/privileges", web::get().to(role_privileges)),
    );
}

async fn list_roles(state: web::Data<AppState>) -> Result<HttpResponse> {
    let roles = state.policy().list_roles().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(roles)))
}

#[derive(Debug, Serialize)]
struct RolePrivileges {
    role: crate::auth::rbac::Role,
    privileges: Vec<crate::auth::rbac::RolePrivilege>,
}

async fn role_privileges(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let keyword = path.into_inner().to_lowercase();
    let store = state.policy();

    let role = store
        .find_role(&keyword)
        .await?
        .ok_or_else(|| AccessError::not_found(format!("Role not found: {}", keyword)))?;
    let privileges = store.role_privileges(&keyword).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(RolePrivileges { role, privileges })))
}
