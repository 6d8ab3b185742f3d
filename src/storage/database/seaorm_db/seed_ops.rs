use crate::auth::rbac::DefaultPolicy;
use crate::utils::error::{AccessError, Result};
use sea_orm::*;
use tracing::info;

use super::super::entities::{self, action, module, role, role_privilege, scope};
use super::types::{SeaOrmDatabase, SeedReport};

impl SeaOrmDatabase {
    /// Insert the default authorization rows that are missing
    ///
    /// Existing rows are left as they are, so running it twice writes nothing
    /// the second time.
    pub async fn seed_defaults(&self) -> Result<SeedReport> {
        let defaults = DefaultPolicy::new();
        let txn = self.db.begin().await.map_err(AccessError::Database)?;
        let mut report = SeedReport::default();

        for a in &defaults.actions {
            if entities::Action::find_by_id(a.keyword.clone())
                .one(&txn)
                .await?
                .is_none()
            {
                action::ActiveModel {
                    keyword: Set(a.keyword.clone()),
                    name: Set(a.name.clone()),
                    score: Set(a.score),
                }
                .insert(&txn)
                .await?;
                report.actions += 1;
            }
        }

        for s in &defaults.scopes {
            if entities::Scope::find_by_id(s.keyword.clone())
                .one(&txn)
                .await?
                .is_none()
            {
                scope::ActiveModel {
                    keyword: Set(s.keyword.clone()),
                    name: Set(s.name.clone()),
                    score: Set(s.score),
                }
                .insert(&txn)
                .await?;
                report.scopes += 1;
            }
        }

        for m in &defaults.modules {
            if entities::Module::find_by_id(m.keyword.clone())
                .one(&txn)
                .await?
                .is_none()
            {
                module::ActiveModel {
                    keyword: Set(m.keyword.clone()),
                    name: Set(m.name.clone()),
                }
                .insert(&txn)
                .await?;
                report.modules += 1;
            }
        }

        for r in &defaults.roles {
            if entities::Role::find_by_id(r.keyword.clone())
                .one(&txn)
                .await?
                .is_none()
            {
                role::ActiveModel {
                    keyword: Set(r.keyword.clone()),
                    name: Set(r.name.clone()),
                }
                .insert(&txn)
                .await?;
                report.roles += 1;
            }
        }

        for p in &defaults.privileges {
            let existing = entities::RolePrivilege::find()
                .filter(role_privilege::Column::RoleKeyword.eq(p.role_name.as_str()))
                .filter(role_privilege::Column::ModuleKeyword.eq(p.module_keyword.as_str()))
                .filter(role_privilege::Column::ActionKeyword.eq(p.action_keyword.as_str()))
                .one(&txn)
                .await?;
            if existing.is_none() {
                role_privilege::ActiveModel {
                    role_keyword: Set(p.role_name.clone()),
                    module_keyword: Set(p.module_keyword.clone()),
                    action_keyword: Set(p.action_keyword.clone()),
                    scope_keyword: Set(p.scope_keyword.clone()),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                report.privileges += 1;
            }
        }

        txn.commit().await.map_err(AccessError::Database)?;

        info!(
            rows = report.total(),
            privileges = report.privileges,
            "Default authorization data seeded"
        );
        Ok(report)
    }
}
