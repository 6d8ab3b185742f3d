use crate::auth::rbac::{PolicyStore, PrivilegeAssignment, Role, RolePrivilege};
use crate::utils::error::{AccessError, Result};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, action, role, role_privilege};
use super::types::SeaOrmDatabase;

#[async_trait]
impl PolicyStore for SeaOrmDatabase {
    async fn action_score(&self, action_keyword: &str) -> Result<Option<i32>> {
        let action = entities::Action::find_by_id(action_keyword.to_string())
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(action.and_then(|a| a.score))
    }

    async fn privilege_for(
        &self,
        role_keyword: &str,
        module_keyword: &str,
    ) -> Result<Option<PrivilegeAssignment>> {
        debug!(role = role_keyword, module = module_keyword, "Loading privilege row");

        let row = entities::RolePrivilege::find()
            .filter(role_privilege::Column::RoleKeyword.eq(role_keyword))
            .filter(role_privilege::Column::ModuleKeyword.eq(module_keyword))
            .order_by_asc(role_privilege::Column::Id)
            .find_also_related(entities::Action)
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(row.map(|(privilege, action): (role_privilege::Model, Option<action::Model>)| {
            PrivilegeAssignment {
                action_score: action.and_then(|a| a.score),
                action_keyword: privilege.action_keyword,
                scope_keyword: privilege.scope_keyword,
            }
        }))
    }

    async fn list_roles(&self) -> Result<Vec<Role>> {
        let roles = entities::Role::find()
            .order_by_asc(role::Column::Keyword)
            .all(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(roles.into_iter().map(Role::from).collect())
    }

    async fn find_role(&self, role_keyword: &str) -> Result<Option<Role>> {
        let role = entities::Role::find_by_id(role_keyword.to_string())
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(role.map(Role::from))
    }

    async fn role_privileges(&self, role_keyword: &str) -> Result<Vec<RolePrivilege>> {
        let rows = entities::RolePrivilege::find()
            .filter(role_privilege::Column::RoleKeyword.eq(role_keyword))
            .order_by_asc(role_privilege::Column::Id)
            .all(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(rows.into_iter().map(RolePrivilege::from).collect())
    }

    async fn ping(&self) -> Result<()> {
        self.health_check().await
    }
}
