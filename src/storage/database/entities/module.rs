use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Protected module database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "modules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub keyword: String,

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
