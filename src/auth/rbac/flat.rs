//! Legacy `"module:action"` permission lists
//!
//! Older role definitions store a flat list of permission names. They are not
//! checked by a separate code path: each list is converted into ordinary
//! privilege rows (the highest listed action per module) and fed to the same
//! resolver. The scope follows the old heuristic, `all` for the admin role and
//! `project` for everyone else.

use super::keywords::{actions, roles};
use super::scope::ScopeName;
use super::types::{Action, RolePrivilege};
use crate::utils::error::{AccessError, Result};
use std::collections::BTreeMap;

/// Flat permission names granted to one role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatPermissionGrants {
    pub role: String,
    pub permissions: Vec<String>,
}

impl FlatPermissionGrants {
    pub fn new<R: Into<String>>(role: R, permissions: Vec<String>) -> Self {
        Self {
            role: role.into(),
            permissions,
        }
    }

    /// Scope the old model implied for this role
    pub fn implied_scope(&self) -> ScopeName {
        if self.role.eq_ignore_ascii_case(roles::ADMIN) {
            ScopeName::All
        } else {
            ScopeName::Project
        }
    }

    /// Convert into privilege rows, scored against `known_actions`
    ///
    /// Modules keep their order of first appearance. An unparsable entry or an
    /// action without a score is a configuration error.
    pub fn into_privileges(&self, known_actions: &[Action]) -> Result<Vec<RolePrivilege>> {
        let role = self.role.to_lowercase();
        let scope = self.implied_scope();

        let mut order: Vec<String> = Vec::new();
        let mut strongest: BTreeMap<String, (i32, String)> = BTreeMap::new();

        for permission in &self.permissions {
            let (module, action_word) = permission.split_once(':').ok_or_else(|| {
                AccessError::config(format!("Malformed permission name: {:?}", permission))
            })?;
            if module.is_empty() {
                return Err(AccessError::config(format!(
                    "Permission without module: {:?}",
                    permission
                )));
            }

            let keyword = action_keyword(action_word).ok_or_else(|| {
                AccessError::config(format!("Unknown action in permission {:?}", permission))
            })?;
            let score = known_actions
                .iter()
                .find(|a| a.keyword == keyword)
                .and_then(|a| a.score)
                .ok_or_else(|| {
                    AccessError::config(format!("Action {:?} has no score", keyword))
                })?;

            match strongest.get(module) {
                Some((current, _)) if *current >= score => {}
                Some(_) => {
                    strongest.insert(module.to_string(), (score, keyword.to_string()));
                }
                None => {
                    order.push(module.to_string());
                    strongest.insert(module.to_string(), (score, keyword.to_string()));
                }
            }
        }

        Ok(order
            .into_iter()
            .filter_map(|module| {
                strongest.remove(&module).map(|(_, action)| {
                    RolePrivilege::new(&role, &module, &action, scope.as_str())
                })
            })
            .collect())
    }
}

/// Map the verbs used in flat permission names onto action keywords
fn action_keyword(word: &str) -> Option<&'static str> {
    match word.to_ascii_lowercase().as_str() {
        "r" | "read" | "view" => Some(actions::READ),
        "w" | "write" | "create" => Some(actions::WRITE),
        "u" | "update" | "edit" => Some(actions::UPDATE),
        "d" | "delete" | "remove" => Some(actions::DELETE),
        _ => None,
    }
}
