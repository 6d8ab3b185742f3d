use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Action database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "actions")]
pub struct Model {
    /// Action keyword (`r`, `w`, `u`, `d`)
    #[sea_orm(primary_key, auto_increment = false)]
    pub keyword: String,

    /// Display name
    pub name: String,

    /// Position on the privilege scale; null never satisfies a check
    pub score: Option<i32>,
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
