//! Default authorization data
//!
//! The rows every fresh installation starts with. Both the in-memory store and
//! the database seeder are built from [`DefaultPolicy`].

use super::keywords::{actions, modules, roles};
use super::scope::ScopeName;
use super::types::{Action, Module, Role, RolePrivilege, Scope};

/// Complete set of default policy rows
#[derive(Debug, Clone)]
pub struct DefaultPolicy {
    pub actions: Vec<Action>,
    pub scopes: Vec<Scope>,
    pub modules: Vec<Module>,
    pub roles: Vec<Role>,
    pub privileges: Vec<RolePrivilege>,
}

impl DefaultPolicy {
    pub fn new() -> Self {
        let actions = [
            (actions::READ, "Read", 1),
            (actions::WRITE, "Write", 2),
            (actions::UPDATE, "Update", 3),
            (actions::DELETE, "Delete", 4),
        ]
        .into_iter()
        .map(|(keyword, name, score)| Action {
            keyword: keyword.to_string(),
            name: name.to_string(),
            score: Some(score),
        })
        .collect();

        let scopes = [ScopeName::All, ScopeName::Project, ScopeName::Own]
            .into_iter()
            .map(|scope| Scope {
                keyword: scope.as_str().to_string(),
                name: capitalize(scope.as_str()),
                score: Some(scope.score()),
            })
            .collect();

        let modules = [
            (modules::PROJECTS, "Projects"),
            (modules::TEST_CASES, "Test Cases"),
            (modules::TEST_RUNS, "Test Runs"),
            (modules::USERS, "Users"),
        ]
        .into_iter()
        .map(|(keyword, name)| Module {
            keyword: keyword.to_string(),
            name: name.to_string(),
        })
        .collect();

        let roles = [
            (roles::ADMIN, "Admin"),
            (roles::PROJECT_MANAGER, "Project Manager"),
            (roles::TESTER, "Tester"),
            (roles::VIEWER, "Viewer"),
        ]
        .into_iter()
        .map(|(keyword, name)| Role {
            keyword: keyword.to_string(),
            name: name.to_string(),
        })
        .collect();

        let all = ScopeName::All.as_str();
        let project = ScopeName::Project.as_str();
        let work_modules = [modules::PROJECTS, modules::TEST_CASES, modules::TEST_RUNS];

        let mut privileges = Vec::new();
        for module in work_modules.iter().chain(std::iter::once(&modules::USERS)) {
            privileges.push(RolePrivilege::new(roles::ADMIN, module, actions::DELETE, all));
        }
        for role in [roles::PROJECT_MANAGER, roles::TESTER] {
            for module in work_modules {
                privileges.push(RolePrivilege::new(role, module, actions::DELETE, all));
            }
        }
        for module in work_modules {
            privileges.push(RolePrivilege::new(
                roles::VIEWER,
                module,
                actions::READ,
                project,
            ));
        }

        Self {
            actions,
            scopes,
            modules,
            roles,
            privileges,
        }
    }
}

impl Default for DefaultPolicy {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalize(keyword: &str) -> String {
    let mut chars = keyword.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
