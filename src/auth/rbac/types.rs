//! RBAC type definitions

use super::scope::ScopeName;
use serde::{Deserialize, Serialize};

/// Role definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Lowercase keyword referenced by privileges and users
    pub keyword: String,
    /// Display name
    pub name: String,
}

/// Protected functional area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub keyword: String,
    pub name: String,
}

/// Operation class with its privilege score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub keyword: String,
    pub name: String,
    /// Position on the privilege scale; `None` means the action can never be satisfied
    pub score: Option<i32>,
}

/// Data-visibility breadth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    pub keyword: String,
    pub name: String,
    /// Informational only, never compared by the resolver
    pub score: Option<i32>,
}

/// Assignment of a capped action and a scope to a (role, module) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePrivilege {
    pub role_name: String,
    pub module_keyword: String,
    pub action_keyword: String,
    pub scope_keyword: String,
}

impl RolePrivilege {
    pub fn new(role: &str, module: &str, action: &str, scope: &str) -> Self {
        Self {
            role_name: role.to_string(),
            module_keyword: module.to_string(),
            action_keyword: action.to_string(),
            scope_keyword: scope.to_string(),
        }
    }
}

/// The privilege row a store returns for one (role, module) lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivilegeAssignment {
    pub action_keyword: String,
    /// Score of the assigned action, joined from the action table
    pub action_score: Option<i32>,
    pub scope_keyword: String,
}

/// Access decision attached to a request after a successful check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeInfo {
    pub access: bool,
    /// Empty whenever `access` is false
    pub scope_name: String,
}

impl ScopeInfo {
    pub fn granted<S: Into<String>>(scope_name: S) -> Self {
        Self {
            access: true,
            scope_name: scope_name.into(),
        }
    }

    pub fn denied() -> Self {
        Self {
            access: false,
            scope_name: String::new(),
        }
    }

    /// Whether the decision lets the request through
    pub fn is_granted(&self) -> bool {
        self.access && !self.scope_name.is_empty()
    }

    /// Parsed scope, `None` for denials and unrecognised keywords
    pub fn scope(&self) -> Option<ScopeName> {
        if !self.access {
            return None;
        }
        self.scope_name.parse().ok()
    }
}
