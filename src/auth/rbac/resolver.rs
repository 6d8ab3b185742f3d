//! Score-comparison permission resolution

use super::store::PolicyStore;
use super::types::ScopeInfo;
use crate::utils::error::{AccessError, Result};
use std::sync::Arc;
use tracing::debug;

/// Decides whether a role may perform an action on a module, and at what scope
///
/// A role's privilege on a module is capped at one action. Actions sit on a
/// single scale (`r=1 < w=2 < u=3 < d=4`), so a cap of `u` also satisfies
/// `r` and `w` checks on the same module.
#[derive(Clone)]
pub struct PermissionResolver {
    store: Arc<dyn PolicyStore>,
}

impl std::fmt::Debug for PermissionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionResolver").finish_non_exhaustive()
    }
}

impl PermissionResolver {
    pub fn new(store: Arc<dyn PolicyStore>) -> Self {
        Self { store }
    }

    /// Underlying policy store
    pub fn store(&self) -> &Arc<dyn PolicyStore> {
        &self.store
    }

    /// Resolve `(role, module, action)` into an access decision
    ///
    /// Unknown actions, missing privilege rows and unscored actions all deny.
    /// A failing store read is reported as [`AccessError::PolicyLookup`],
    /// which the HTTP layer turns into a denial.
    pub async fn resolve(
        &self,
        role_name: &str,
        module_keyword: &str,
        action_keyword: &str,
    ) -> Result<ScopeInfo> {
        let role_keyword = role_name.to_lowercase();

        let Some(required) = self
            .store
            .action_score(action_keyword)
            .await
            .map_err(into_policy_error)?
            .filter(|score| *score > 0)
        else {
            debug!(action = action_keyword, "Unknown or unscored action, denying");
            return Ok(ScopeInfo::denied());
        };

        let Some(assignment) = self
            .store
            .privilege_for(&role_keyword, module_keyword)
            .await
            .map_err(into_policy_error)?
        else {
            debug!(
                role = %role_keyword,
                module = module_keyword,
                "No privilege row, denying"
            );
            return Ok(ScopeInfo::denied());
        };

        let Some(assigned) = assignment.action_score.filter(|score| *score > 0) else {
            return Ok(ScopeInfo::denied());
        };

        if assigned >= required {
            Ok(ScopeInfo::granted(assignment.scope_keyword))
        } else {
            debug!(
                role = %role_keyword,
                module = module_keyword,
                assigned,
                required,
                "Assigned action below required score"
            );
            Ok(ScopeInfo::denied())
        }
    }
}

fn into_policy_error(err: AccessError) -> AccessError {
    match err {
        AccessError::PolicyLookup(_) => err,
        other => AccessError::PolicyLookup(other.to_string()),
    }
}
