use crate::auth::{SessionStore, UserInfo};
use crate::utils::error::{AccessError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, user, user_session};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert a user row
    pub async fn create_user(&self, user: &UserInfo) -> Result<()> {
        debug!("Creating user: {}", user.email);

        let model = user::ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            name: Set(user.name.clone()),
            role: Set(user.role.clone()),
            org_id: Set(user.org_id.clone()),
            is_deleted: Set(false),
            created_at: Set(Utc::now().into()),
        };

        entities::User::insert(model)
            .exec(&self.db)
            .await
            .map_err(AccessError::Database)?;
        Ok(())
    }

    /// Soft-delete a user; their sessions and bearer tokens stop resolving
    pub async fn delete_user(&self, user_id: Uuid) -> Result<()> {
        let mut user: user::ActiveModel = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?
            .ok_or_else(|| AccessError::not_found("User not found"))?
            .into();

        user.is_deleted = Set(true);
        user.update(&self.db).await.map_err(AccessError::Database)?;
        Ok(())
    }

    /// Open a session for `user_id` and return its token
    pub async fn create_session(&self, user_id: Uuid, expires_at: DateTime<Utc>) -> Result<String> {
        let token = Uuid::new_v4().simple().to_string();

        let model = user_session::ActiveModel {
            id: Set(token.clone()),
            user_id: Set(user_id),
            expires_at: Set(expires_at.into()),
            created_at: Set(Utc::now().into()),
            is_active: Set(true),
        };

        entities::UserSession::insert(model)
            .exec(&self.db)
            .await
            .map_err(AccessError::Database)?;

        debug!("Created session for user: {}", user_id);
        Ok(token)
    }

    /// Mark a session inactive
    pub async fn end_session(&self, token: &str) -> Result<()> {
        entities::UserSession::update_many()
            .col_expr(user_session::Column::IsActive, Expr::value(false))
            .filter(user_session::Column::Id.eq(token))
            .exec(&self.db)
            .await
            .map_err(AccessError::Database)?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for SeaOrmDatabase {
    async fn find_session_user(&self, token: &str) -> Result<Option<UserInfo>> {
        let now: DateTimeWithTimeZone = Utc::now().into();

        let row = entities::UserSession::find_by_id(token.to_string())
            .filter(user_session::Column::IsActive.eq(true))
            .filter(user_session::Column::ExpiresAt.gt(now))
            .find_also_related(entities::User)
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(row
            .and_then(|(_, user)| user)
            .filter(|user| !user.is_deleted)
            .map(|user| user.to_user_info()))
    }

    async fn find_active_user(&self, user_id: Uuid) -> Result<Option<UserInfo>> {
        let user = entities::User::find_by_id(user_id)
            .filter(user::Column::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(AccessError::Database)?;

        Ok(user.map(|user| user.to_user_info()))
    }
}
