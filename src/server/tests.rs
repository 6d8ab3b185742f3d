//! Tests for the assembled application

#[cfg(test)]
mod tests {
    use crate::auth::rbac::{InMemoryPolicyStore, PolicyStore, PrivilegeAssignment, Role, RolePrivilege};
    use crate::auth::{InMemorySessionStore, UserInfo};
    use crate::config::{Config, ServerConfig};
    use crate::projects::{InMemoryProjectStore, Project};
    use crate::server::{AppState, HttpServer};
    use crate::utils::error::{AccessError, Result};
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use std::sync::Arc;
    use uuid::Uuid;

    fn config() -> Config {
        let mut config = Config::default();
        config.service.auth.jwt_secret = "server_tests_secret_0123456789abcdefghij".to_string();
        config
    }

    fn caller(role: &str) -> UserInfo {
        UserInfo {
            id: Uuid::new_v4(),
            email: format!("{}@example.com", role),
            name: role.to_string(),
            role: role.to_string(),
            org_id: None,
        }
    }

    fn state_with(policy: Arc<dyn PolicyStore>, callers: &[&UserInfo]) -> AppState {
        let sessions = callers
            .iter()
            .fold(InMemorySessionStore::new(), |sessions, user| {
                sessions.with_user((*user).clone())
            });
        AppState::new(config(), policy, Arc::new(sessions))
    }

    fn bearer(state: &AppState, user: &UserInfo) -> String {
        format!("Bearer {}", state.identity.jwt().create_token(user).unwrap())
    }

    struct DownStore;

    #[async_trait]
    impl PolicyStore for DownStore {
        async fn action_score(&self, _: &str) -> Result<Option<i32>> {
            Err(AccessError::internal("database is down"))
        }

        async fn privilege_for(&self, _: &str, _: &str) -> Result<Option<PrivilegeAssignment>> {
            Err(AccessError::internal("database is down"))
        }

        async fn list_roles(&self) -> Result<Vec<Role>> {
            Err(AccessError::internal("database is down"))
        }

        async fn find_role(&self, _: &str) -> Result<Option<Role>> {
            Err(AccessError::internal("database is down"))
        }

        async fn role_privileges(&self, _: &str) -> Result<Vec<RolePrivilege>> {
            Err(AccessError::internal("database is down"))
        }
    }

    #[actix_web::test]
    async fn test_health_reports_store_state() {
        let healthy = state_with(Arc::new(InMemoryPolicyStore::with_defaults()), &[]);
        let app = test::init_service(HttpServer::create_app(web::Data::new(healthy))).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key("x-request-id"));

        let broken = state_with(Arc::new(DownStore), &[]);
        let app = test::init_service(HttpServer::create_app(web::Data::new(broken))).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Policy store unavailable");
        assert_eq!(body["data"]["status"], "unhealthy");
        assert_eq!(body["data"]["policy_store"], false);
    }

    #[actix_web::test]
    async fn test_roles_listing_requires_user_read() {
        let (admin, tester) = (caller("admin"), caller("tester"));
        let state = state_with(Arc::new(InMemoryPolicyStore::with_defaults()), &[&admin, &tester]);
        let admin = bearer(&state, &admin);
        let tester = bearer(&state, &tester);
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get()
            .uri("/api/roles")
            .insert_header(("authorization", admin))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(4));
        assert_eq!(body["data"][0]["keyword"], "admin");

        let req = test::TestRequest::get()
            .uri("/api/roles")
            .insert_header(("authorization", tester))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_role_privileges_route() {
        let admin = caller("admin");
        let state = state_with(Arc::new(InMemoryPolicyStore::with_defaults()), &[&admin]);
        let admin = bearer(&state, &admin);
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get()
            .uri("/api/roles/Viewer/privileges")
            .insert_header(("authorization", admin.clone()))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["role"]["name"], "Viewer");
        assert_eq!(body["data"]["privileges"].as_array().map(Vec::len), Some(3));

        let req = test::TestRequest::get()
            .uri("/api/roles/guest/privileges")
            .insert_header(("authorization", admin))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Role not found: guest");
    }

    #[actix_web::test]
    async fn test_access_route_echoes_decision() {
        let admin = caller("Admin");
        let state = state_with(Arc::new(InMemoryPolicyStore::with_defaults()), &[&admin]);
        let admin = bearer(&state, &admin);
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get()
            .uri("/api/access/tc/u")
            .insert_header(("authorization", admin.clone()))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["role"], "admin");
        assert_eq!(body["data"]["access"], true);
        assert_eq!(body["data"]["scope_name"], "all");

        let req = test::TestRequest::get()
            .uri("/api/access/defects/r")
            .insert_header(("authorization", admin))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["access"], false);
        assert_eq!(body["data"]["scope_name"], "");
    }

    #[actix_web::test]
    async fn test_policy_outage_fails_closed() {
        let admin = caller("admin");
        let state = state_with(Arc::new(DownStore), &[&admin]);
        let admin = bearer(&state, &admin);
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get()
            .uri("/api/roles")
            .insert_header(("authorization", admin))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Access denied");
    }

    #[actix_web::test]
    async fn test_session_exchanges_for_working_bearer_token() {
        let admin = caller("admin");
        let sessions = InMemorySessionStore::new().with_session(
            "admin-session",
            admin.clone(),
            Utc::now() + Duration::hours(1),
        );
        let state = AppState::new(
            config(),
            Arc::new(InMemoryPolicyStore::with_defaults()),
            Arc::new(sessions),
        );
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get()
            .uri("/api/auth/token")
            .insert_header(("cookie", "session=admin-session"))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["expires_in"], 30 * 24 * 60 * 60);
        assert!(body["message"].as_str().unwrap().contains("Bearer"));
        let token = body["data"]["token"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/api/roles")
            .insert_header(("authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        // a bearer token cannot mint another one
        let req = test::TestRequest::get()
            .uri("/api/auth/token")
            .insert_header(("authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_token_requires_live_session() {
        let state = state_with(Arc::new(InMemoryPolicyStore::with_defaults()), &[]);
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get().uri("/api/auth/token").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/api/auth/token")
            .insert_header(("cookie", "session=unknown"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Unauthorized - Please log in first");
    }

    #[actix_web::test]
    async fn test_project_listing_follows_granted_scope() {
        let (admin, viewer) = (caller("admin"), caller("viewer"));
        let projects = InMemoryProjectStore::new()
            .with_project(Project::new("WEB", "Web app", admin.id).with_member(viewer.id))
            .with_project(Project::new("OPS", "Operations", admin.id));
        let state = state_with(Arc::new(InMemoryPolicyStore::with_defaults()), &[&admin, &viewer])
            .with_projects(Arc::new(projects));
        let (admin, viewer) = (bearer(&state, &admin), bearer(&state, &viewer));
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get()
            .uri("/api/projects")
            .insert_header(("authorization", admin))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(2));

        let req = test::TestRequest::get()
            .uri("/api/projects")
            .insert_header(("authorization", viewer))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["data"][0]["key"], "WEB");
    }

    #[std::prelude::v1::test]
    fn test_with_state_keeps_server_config() {
        let state = state_with(Arc::new(InMemoryPolicyStore::new()), &[]);
        let server = HttpServer::with_state(
            ServerConfig {
                port: 9100,
                ..ServerConfig::default()
            },
            state,
        );
        assert_eq!(server.config().port, 9100);
        assert!(server.state().config().auth().lookup_timeout_ms > 0);
    }
}
