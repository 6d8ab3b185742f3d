//! Database integration tests
//!
//! The seeded in-memory SQLite database acting as policy and session store.

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::{TestDatabase, UserFactory};
    use chrono::{Duration, Utc};
    use eztest_access::auth::SessionStore;
    use eztest_access::auth::rbac::keywords::{actions, modules, roles};
    use eztest_access::auth::rbac::{PermissionResolver, PolicyStore, ScopeInfo, ScopeName};
    use eztest_access::projects::{Project, ProjectStore, visible_projects};
    use eztest_access::storage::DatabaseBackendType;

    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::new().await;
        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);
        assert_ok!(db.db().health_check().await);
    }

    #[tokio::test]
    async fn test_migrations_are_rerunnable() {
        let db = TestDatabase::new().await;
        assert_ok!(db.db().migrate().await);
    }

    #[tokio::test]
    async fn test_seeding_is_idempotent() {
        let db = TestDatabase::new().await;

        let first = assert_ok!(db.db().seed_defaults().await);
        assert_eq!(first.actions, 4);
        assert_eq!(first.scopes, 3);
        assert_eq!(first.modules, 4);
        assert_eq!(first.roles, 4);
        assert_eq!(first.privileges, 13);

        let second = assert_ok!(db.db().seed_defaults().await);
        assert_eq!(second.total(), 0);
    }

    #[tokio::test]
    async fn test_seeded_policy_rows() {
        let db = TestDatabase::seeded().await;
        let store = db.db();

        assert_eq!(assert_ok!(store.action_score(actions::UPDATE).await), Some(3));
        assert_eq!(assert_ok!(store.action_score("approve").await), None);

        let roles: Vec<_> = assert_ok!(store.list_roles().await)
            .into_iter()
            .map(|r| r.keyword)
            .collect();
        assert_eq!(roles, vec!["admin", "project_manager", "tester", "viewer"]);

        let viewer = assert_ok!(store.privilege_for(roles::VIEWER, modules::TEST_RUNS).await)
            .expect("viewer has a test run privilege");
        assert_eq!(viewer.action_keyword, actions::READ);
        assert_eq!(viewer.action_score, Some(1));
        assert_eq!(viewer.scope_keyword, "project");

        assert!(
            assert_ok!(store.privilege_for(roles::TESTER, modules::USERS).await).is_none()
        );
        assert_eq!(assert_ok!(store.role_privileges(roles::ADMIN).await).len(), 4);
    }

    #[tokio::test]
    async fn test_resolver_over_database() {
        let db = TestDatabase::seeded().await;
        let resolver = PermissionResolver::new(db.db_arc());

        let manager = assert_ok!(
            resolver
                .resolve("Project_Manager", modules::TEST_CASES, actions::DELETE)
                .await
        );
        assert_eq!(manager.scope(), Some(ScopeName::All));

        let viewer = assert_ok!(
            resolver
                .resolve(roles::VIEWER, modules::PROJECTS, actions::UPDATE)
                .await
        );
        assert_eq!(viewer, ScopeInfo::denied());

        let guest = assert_ok!(resolver.resolve("guest", modules::PROJECTS, actions::READ).await);
        assert_eq!(guest, ScopeInfo::denied());
    }

    #[tokio::test]
    async fn test_session_lookup() {
        let db = TestDatabase::seeded().await;
        let store = db.db();
        let tester = UserFactory::with_role("tester");
        assert_ok!(store.create_user(&tester).await);

        let live = assert_ok!(store.create_session(tester.id, Utc::now() + Duration::hours(2)).await);
        let stale = assert_ok!(store.create_session(tester.id, Utc::now() - Duration::minutes(1)).await);
        let ended = assert_ok!(store.create_session(tester.id, Utc::now() + Duration::hours(2)).await);
        assert_ok!(store.end_session(&ended).await);

        assert_eq!(assert_ok!(store.find_session_user(&live).await), Some(tester.clone()));
        assert_eq!(assert_ok!(store.find_session_user(&stale).await), None);
        assert_eq!(assert_ok!(store.find_session_user(&ended).await), None);
        assert_eq!(assert_ok!(store.find_session_user("no-such-session").await), None);

        assert_eq!(assert_ok!(store.find_active_user(tester.id).await), Some(tester.clone()));

        assert_ok!(store.delete_user(tester.id).await);
        assert_eq!(assert_ok!(store.find_session_user(&live).await), None);
        assert_eq!(assert_ok!(store.find_active_user(tester.id).await), None);
    }

    #[tokio::test]
    async fn test_project_listing_with_members() {
        let db = TestDatabase::seeded().await;
        let store = db.db();
        let manager = UserFactory::with_role("project_manager");
        let viewer = UserFactory::with_role("viewer");
        assert_ok!(store.create_user(&manager).await);
        assert_ok!(store.create_user(&viewer).await);

        let mut web = Project::new("WEB", "Web app", manager.id);
        web.created_at -= Duration::hours(1);
        let api = Project::new("API", "Public API", manager.id);
        assert_ok!(store.create_project(&web).await);
        assert_ok!(store.create_project(&api).await);
        assert_ok!(store.add_project_member(web.id, viewer.id).await);
        assert_ok!(store.add_project_member(web.id, viewer.id).await);

        let listed = assert_ok!(store.list_projects().await);
        let keys: Vec<_> = listed.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["API", "WEB"]);
        assert_eq!(listed[1].member_ids.len(), 2);

        let seen = assert_ok!(
            visible_projects(store, viewer.id, &ScopeInfo::granted("project")).await
        );
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].id, web.id);

        assert_ok!(store.delete_project(web.id).await);
        let seen = assert_ok!(
            visible_projects(store, viewer.id, &ScopeInfo::granted("project")).await
        );
        assert!(seen.is_empty());
    }
}
