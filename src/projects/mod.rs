//! Projects, the records access scopes are defined over
//!
//! A granted request carries a [`ScopeInfo`]; [`visible_projects`] narrows
//! the project list to what that scope lets the caller see.

use crate::auth::rbac::{ScopeInfo, ScopedRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;


/// A project with its member list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    /// Short unique key, e.g. `WEB`
    pub key: String,
    pub name: String,
    pub created_by: Uuid,
    pub member_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// A fresh project whose creator is its only member
    pub fn new(key: &str, name: &str, created_by: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            key: key.to_string(),
            name: name.to_string(),
            created_by,
            member_ids: vec![created_by],
            created_at: Utc::now(),
        }
    }

    pub fn with_member(mut self, user_id: Uuid) -> Self {
        if !self.member_ids.contains(&user_id) {
            self.member_ids.push(user_id);
        }
        self
    }
}

impl ScopedRecord for Project {
    fn created_by(&self) -> Option<Uuid> {
        Some(self.created_by)
    }

    fn has_member(&self, user: Uuid) -> bool {
        self.member_ids.contains(&user)
    }
}

/// Read access to live (not deleted) projects
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Every live project with its members, newest first
    async fn list_projects(&self) -> Result<Vec<Project>>;
}

/// Projects held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectStore {
    projects: Vec<Project>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        let mut projects = self.projects.clone();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }
}

/// Projects `caller` may see under `decision`
///
/// A denial or an unrecognised scope keyword yields nothing, without touching
/// the store.
pub async fn visible_projects(
    store: &dyn ProjectStore,
    caller: Uuid,
    decision: &ScopeInfo,
) -> Result<Vec<Project>> {
    let Some(scope) = decision.scope() else {
        return Ok(Vec::new());
    };
    Ok(scope.filter(caller, store.list_projects().await?))
}
