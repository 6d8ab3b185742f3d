//! Project listing narrowed to the caller's scope

use crate::auth::rbac::keywords::{actions, modules};
use crate::projects::visible_projects;
use crate::server::middleware::{get_scope_info, get_user_info, AccessGate};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::debug;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/projects")
            .wrap(AccessGate::new(modules::PROJECTS, actions::READ))
            .route(web::get().to(list_projects)),
    );
}

/// Projects visible under the scope the gate granted
async fn list_projects(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let user = get_user_info(&req)?;
    let scope = get_scope_info(&req)?;

    let projects = visible_projects(state.projects.as_ref(), user.id, &scope).await?;
    debug!(
        user_id = %user.id,
        scope = %scope.scope_name,
        count = projects.len(),
        "Listed projects"
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(projects)))
}
