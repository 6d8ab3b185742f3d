//! Role-Based Access Control (RBAC) system
//!
//! Scored privilege resolution over a read-only policy store.

mod defaults;
mod flat;
pub mod keywords;
mod resolver;
mod scope;
mod store;
mod types;

pub use defaults::DefaultPolicy;
pub use flat::FlatPermissionGrants;
pub use resolver::PermissionResolver;
pub use scope::{ScopeName, ScopedRecord, UnknownScope};
pub use store::{InMemoryPolicyStore, PolicyStore};
pub use types::{Action, Module, PrivilegeAssignment, Role, RolePrivilege, Scope, ScopeInfo};
