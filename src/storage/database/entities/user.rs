use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
///
/// Only the identity fields access checks need.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// User ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Email address (unique)
    #[sea_orm(unique)]
    pub email: String,

    pub name: String,

    /// Role keyword; matched case-insensitively against the role table
    pub role: String,

    /// Owning organisation (optional)
    pub org_id: Option<String>,

    /// Soft-delete flag
    pub is_deleted: bool,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

/// User entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// User sessions relation
    #[sea_orm(has_many = "super::user_session::Entity")]
    UserSessions,
}

impl Related<super::user_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserSessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert into the identity attached to requests
    pub fn to_user_info(&self) -> crate::auth::UserInfo {
        crate::auth::UserInfo {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
            org_id: self.org_id.clone(),
        }
    }
}
