use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Privilege row: the action cap and scope one role holds on one module
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "role_privileges")]
pub struct Model {
    /// Insertion order; lookups take the lowest matching id
    #[sea_orm(primary_key)]
    pub id: i32,

    pub role_keyword: String,

    pub module_keyword: String,

    pub action_keyword: String,

    pub scope_keyword: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleKeyword",
        to = "super::role::Column::Keyword"
    )]
    Role,

    #[sea_orm(
        belongs_to = "super::module::Entity",
        from = "Column::ModuleKeyword",
        to = "super::module::Column::Keyword"
    )]
    Module,

    #[sea_orm(
        belongs_to = "super::action::Entity",
        from = "Column::ActionKeyword",
        to = "super::action::Column::Keyword"
    )]
    Action,

    #[sea_orm(
        belongs_to = "super::scope::Entity",
        from = "Column::ScopeKeyword",
        to = "super::scope::Column::Keyword"
    )]
    Scope,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl Related<super::action::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Action.def()
    }
}

impl Related<super::scope::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scope.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::auth::rbac::RolePrivilege {
    fn from(model: Model) -> Self {
        Self {
            role_name: model.role_keyword,
            module_keyword: model.module_keyword,
            action_keyword: model.action_keyword,
            scope_keyword: model.scope_keyword,
        }
    }
}
