use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    /// Lowercase role keyword
    #[sea_orm(primary_key, auto_increment = false)]
    pub keyword: String,

    /// Display name
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::role_privilege::Entity")]
    RolePrivileges,
}

impl Related<super::role_privilege::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RolePrivileges.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::auth::rbac::Role {
    fn from(model: Model) -> Self {
        Self {
            keyword: model.keyword,
            name: model.name,
        }
    }
}
