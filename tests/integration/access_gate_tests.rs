//! Access gate integration tests
//!
//! The gate in front of a spy handler, with a counting policy store behind
//! the resolver.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::StoreFault;
    use crate::common::{CountingPolicyStore, TestDatabase, UserFactory};
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpRequest, HttpResponse, test, web};
    use chrono::{Duration, Utc};
    use eztest_access::auth::rbac::{InMemoryPolicyStore, ScopeInfo};
    use eztest_access::auth::jwt::JwtHandler;
    use eztest_access::auth::{InMemorySessionStore, UserInfo};
    use eztest_access::server::middleware::{get_scope_info, AccessGate};
    use eztest_access::{AppState, Config, HttpServer};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const SECRET: &str = "integration_tests_secret_0123456789abcdef";

    fn config(lookup_timeout_ms: u64) -> Config {
        let mut config = Config::default();
        config.service.auth.jwt_secret = SECRET.to_string();
        config.service.auth.lookup_timeout_ms = lookup_timeout_ms;
        config
    }

    struct Harness {
        state: AppState,
        store: Arc<CountingPolicyStore>,
        hits: Arc<AtomicUsize>,
    }

    impl Harness {
        fn new(fault: StoreFault, lookup_timeout_ms: u64, callers: &[&UserInfo]) -> Self {
            let policy = InMemoryPolicyStore::with_defaults()
                .with_action("read", Some(1))
                .with_action("update", Some(3))
                .with_action("delete", Some(4))
                .with_privilege("tester", "testcases", "update", "project")
                .with_privilege("viewer", "defects", "read", "own");
            let store = Arc::new(CountingPolicyStore::new(Arc::new(policy)).with_fault(fault));
            let sessions = callers
                .iter()
                .fold(InMemorySessionStore::new(), |sessions, user| {
                    sessions.with_user((*user).clone())
                });
            let state = AppState::new(config(lookup_timeout_ms), store.clone(), Arc::new(sessions));
            Self {
                state,
                store,
                hits: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn bearer(&self, user: &UserInfo) -> String {
            let token = self.state.identity.jwt().create_token(user).unwrap();
            format!("Bearer {}", token)
        }
    }

    macro_rules! gated_app {
        ($harness:expr, $module:expr, $action:expr) => {{
            let hits = $harness.hits.clone();
            test::init_service(
                App::new()
                    .app_data(web::Data::new($harness.state.clone()))
                    .service(
                        web::resource("/guarded")
                            .wrap(AccessGate::new($module, $action))
                            .route(web::get().to(move |req: HttpRequest| {
                                let hits = hits.clone();
                                async move {
                                    hits.fetch_add(1, Ordering::SeqCst);
                                    match get_scope_info(&req) {
                                        Ok(scope) => HttpResponse::Ok().json(scope),
                                        Err(_) => HttpResponse::InternalServerError().finish(),
                                    }
                                }
                            })),
                    ),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_unauthenticated_request_never_reaches_store_or_handler() {
        let harness = Harness::new(StoreFault::None, 5000, &[]);
        let app = gated_app!(harness, "testcases", "read");

        let resp = test::call_service(&app, test::TestRequest::get().uri("/guarded").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("authorization", "Bearer not.a.jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        assert_eq!(harness.store.lookups(), 0);
        assert_eq!(harness.hits.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_granted_request_runs_handler_with_scope() {
        let tester = UserFactory::with_role("tester");
        let harness = Harness::new(StoreFault::None, 5000, &[&tester]);
        let app = gated_app!(harness, "testcases", "read");

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("authorization", harness.bearer(&tester)))
            .to_request();
        let scope: ScopeInfo = test::call_and_read_body_json(&app, req).await;

        assert_eq!(scope, ScopeInfo::granted("project"));
        assert_eq!(harness.hits.load(Ordering::SeqCst), 1);
        assert!(harness.store.lookups() >= 2);
    }

    #[actix_web::test]
    async fn test_denied_request_never_reaches_handler() {
        let viewer = UserFactory::with_role("viewer");
        let harness = Harness::new(StoreFault::None, 5000, &[&viewer]);
        let app = gated_app!(harness, "defects", "delete");

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("authorization", harness.bearer(&viewer)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(harness.hits.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_decisions_are_not_cached_between_requests() {
        let tester = UserFactory::with_role("tester");
        let harness = Harness::new(StoreFault::None, 5000, &[&tester]);
        let app = gated_app!(harness, "testcases", "update");

        for _ in 0..3 {
            let req = test::TestRequest::get()
                .uri("/guarded")
                .insert_header(("authorization", harness.bearer(&tester)))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        assert_eq!(harness.store.lookups(), 6);
        assert_eq!(harness.hits.load(Ordering::SeqCst), 3);
    }

    #[actix_web::test]
    async fn test_store_failure_fails_closed() {
        let tester = UserFactory::with_role("tester");
        let harness = Harness::new(StoreFault::Error, 5000, &[&tester]);
        let app = gated_app!(harness, "testcases", "read");

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("authorization", harness.bearer(&tester)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Access denied");
        assert_eq!(harness.hits.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_slow_store_times_out_as_denial() {
        let tester = UserFactory::with_role("tester");
        let harness = Harness::new(
            StoreFault::Stall(std::time::Duration::from_millis(500)),
            20,
            &[&tester],
        );
        let app = gated_app!(harness, "testcases", "read");

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header(("authorization", harness.bearer(&tester)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(harness.hits.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_session_cookie_against_seeded_database() {
        let db = TestDatabase::seeded().await;
        let viewer = UserFactory::with_role("Viewer");
        db.db().create_user(&viewer).await.unwrap();
        let session = db
            .db()
            .create_session(viewer.id, Utc::now() + Duration::hours(1))
            .await
            .unwrap();
        let admin = UserFactory::with_role("admin");
        db.db().create_user(&admin).await.unwrap();
        let admin_session = db
            .db()
            .create_session(admin.id, Utc::now() + Duration::hours(1))
            .await
            .unwrap();

        let state = AppState::new(config(5000), db.db_arc(), db.db_arc());
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        // viewer has no privilege on the users module
        let req = test::TestRequest::get()
            .uri("/api/roles")
            .insert_header(("cookie", format!("session={}", session)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri("/api/access/tc/r")
            .insert_header(("cookie", format!("session={}", admin_session)))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["access"], true);
        assert_eq!(body["data"]["scope_name"], "all");

        db.db().end_session(&admin_session).await.unwrap();
        let req = test::TestRequest::get()
            .uri("/api/roles")
            .insert_header(("cookie", format!("session={}", admin_session)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_bearer_token_of_deleted_user_is_rejected() {
        let db = TestDatabase::seeded().await;
        let admin = UserFactory::with_role("admin");
        db.db().create_user(&admin).await.unwrap();

        let jwt = JwtHandler::new(config(5000).auth());
        let bearer = format!("Bearer {}", jwt.create_token(&admin).unwrap());
        let state = AppState::new(config(5000), db.db_arc(), db.db_arc());
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get()
            .uri("/api/roles")
            .insert_header(("authorization", bearer.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        db.db().delete_user(admin.id).await.unwrap();
        let req = test::TestRequest::get()
            .uri("/api/roles")
            .insert_header(("authorization", bearer))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let never_stored = UserFactory::with_role("admin");
        let forged = jwt.create_token(&never_stored).unwrap();
        let req = test::TestRequest::get()
            .uri("/api/roles")
            .insert_header(("authorization", format!("Bearer {}", forged)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
