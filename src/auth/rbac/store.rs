//! Read-only access to the policy tables

use super::defaults::DefaultPolicy;
use super::types::{Action, PrivilegeAssignment, Role, RolePrivilege};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of role, action and privilege rows for the resolver
///
/// Implementations only read. Lookups are keyed on the stored keywords
/// verbatim; callers normalise role names before asking.
#[async_trait]
pub trait PolicyStore: Send + Sync {
    /// Score of an action keyword; `None` when unknown or unscored
    async fn action_score(&self, action_keyword: &str) -> Result<Option<i32>>;

    /// First privilege row for `(role, module)` in storage order
    async fn privilege_for(
        &self,
        role_keyword: &str,
        module_keyword: &str,
    ) -> Result<Option<PrivilegeAssignment>>;

    /// Every role, ordered by keyword
    async fn list_roles(&self) -> Result<Vec<Role>>;

    /// A single role by keyword
    async fn find_role(&self, role_keyword: &str) -> Result<Option<Role>>;

    /// Every privilege row of one role, in storage order
    async fn role_privileges(&self, role_keyword: &str) -> Result<Vec<RolePrivilege>>;

    /// Cheap reachability check
    async fn ping(&self) -> Result<()> {
        self.list_roles().await.map(|_| ())
    }
}

/// Policy rows held in memory, in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryPolicyStore {
    actions: Vec<Action>,
    roles: Vec<Role>,
    privileges: Vec<RolePrivilege>,
}

impl InMemoryPolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store populated with the default installation rows
    pub fn with_defaults() -> Self {
        let defaults = DefaultPolicy::new();
        Self {
            actions: defaults.actions,
            roles: defaults.roles,
            privileges: defaults.privileges,
        }
    }

    pub fn with_action(mut self, keyword: &str, score: Option<i32>) -> Self {
        self.actions.push(Action {
            keyword: keyword.to_string(),
            name: keyword.to_string(),
            score,
        });
        self
    }

    pub fn with_role(mut self, keyword: &str, name: &str) -> Self {
        self.roles.push(Role {
            keyword: keyword.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn with_privilege(mut self, role: &str, module: &str, action: &str, scope: &str) -> Self {
        self.privileges
            .push(RolePrivilege::new(role, module, action, scope));
        self
    }

    /// Append already built privilege rows
    pub fn extend_privileges<I: IntoIterator<Item = RolePrivilege>>(&mut self, rows: I) {
        self.privileges.extend(rows);
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    fn score_of(&self, action_keyword: &str) -> Option<i32> {
        self.actions
            .iter()
            .find(|a| a.keyword == action_keyword)
            .and_then(|a| a.score)
    }
}

#[async_trait]
impl PolicyStore for InMemoryPolicyStore {
    async fn action_score(&self, action_keyword: &str) -> Result<Option<i32>> {
        Ok(self.score_of(action_keyword))
    }

    async fn privilege_for(
        &self,
        role_keyword: &str,
        module_keyword: &str,
    ) -> Result<Option<PrivilegeAssignment>> {
        Ok(self
            .privileges
            .iter()
            .find(|p| p.role_name == role_keyword && p.module_keyword == module_keyword)
            .map(|p| PrivilegeAssignment {
                action_keyword: p.action_keyword.clone(),
                action_score: self.score_of(&p.action_keyword),
                scope_keyword: p.scope_keyword.clone(),
            }))
    }

    async fn list_roles(&self) -> Result<Vec<Role>> {
        let mut roles = self.roles.clone();
        roles.sort_by(|a, b| a.keyword.cmp(&b.keyword));
        Ok(roles)
    }

    async fn find_role(&self, role_keyword: &str) -> Result<Option<Role>> {
        Ok(self.roles.iter().find(|r| r.keyword == role_keyword).cloned())
    }

    async fn role_privileges(&self, role_keyword: &str) -> Result<Vec<RolePrivilege>> {
        Ok(self
            .privileges
            .iter()
            .filter(|p| p.role_name == role_keyword)
            .cloned()
            .collect())
    }
}
