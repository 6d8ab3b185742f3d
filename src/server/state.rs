//! Application state shared across HTTP handlers

use crate::auth::rbac::{PermissionResolver, PolicyStore};
use crate::auth::{IdentityResolver, SessionStore};
use crate::config::Config;
use crate::projects::{InMemoryProjectStore, ProjectStore};
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Holds no per-request data. Every access decision is re-resolved against
/// the policy store.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Role/module/action decisions
    pub resolver: PermissionResolver,
    /// Session and bearer-token identities
    pub identity: Arc<IdentityResolver>,
    /// Records listed under the caller's scope
    pub projects: Arc<dyn ProjectStore>,
}

impl AppState {
    /// Create a new AppState from its stores, with no projects
    pub fn new(
        config: Config,
        policy: Arc<dyn PolicyStore>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        let identity = IdentityResolver::new(config.auth(), sessions);
        Self {
            config: Arc::new(config),
            resolver: PermissionResolver::new(policy),
            identity: Arc::new(identity),
            projects: Arc::new(InMemoryProjectStore::new()),
        }
    }

    /// Serve projects from `projects`
    pub fn with_projects(mut self, projects: Arc<dyn ProjectStore>) -> Self {
        self.projects = projects;
        self
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Policy store behind the resolver
    pub fn policy(&self) -> &Arc<dyn PolicyStore> {
        self.resolver.store()
    }
}
