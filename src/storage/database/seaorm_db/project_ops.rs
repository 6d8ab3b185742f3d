use crate::projects::{Project, ProjectStore};
use crate::utils::error::{AccessError, Result};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, project, project_member};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert a project together with its member rows
    pub async fn create_project(&self, project: &Project) -> Result<()> {
        debug!("Creating project: {}", project.key);

        let txn = self.db.begin().await.map_err(AccessError::Database)?;

        project::ActiveModel {
            id: Set(project.id),
            key: Set(project.key.clone()),
            name: Set(project.name.clone()),
            created_by: Set(project.created_by),
            is_deleted: Set(false),
            created_at: Set(project.created_at.into()),
        }
        .insert(&txn)
        .await?;

        for user_id in &project.member_ids {
            project_member::ActiveModel {
                project_id: Set(project.id),
                user_id: Set(*user_id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await.map_err(AccessError::Database)?;
        Ok(())
    }

    /// Add `user_id` to a project's members; adding twice is a no-op
    pub async fn add_project_member(&self, project_id: Uuid, user_id: Uuid) -> Result<()> {
        let existing = entities::ProjectMember::find()
            .filter(project_member::Column::ProjectId.eq(project_id))
            .filter(project_member::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        project_member::ActiveModel {
            project_id: Set(project_id),
            user_id: Set(user_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(())
    }

    /// Soft-delete a project; it drops out of every listing
    pub async fn delete_project(&self, project_id: Uuid) -> Result<()> {
        let mut project: project::ActiveModel = entities::Project::find_by_id(project_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AccessError::not_found("Project not found"))?
            .into();

        project.is_deleted = Set(true);
        project.update(&self.db).await?;
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for SeaOrmDatabase {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        let rows = entities::Project::find()
            .filter(project::Column::IsDeleted.eq(false))
            .order_by_desc(project::Column::CreatedAt)
            .find_with_related(entities::ProjectMember)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(project, members)| Project {
                id: project.id,
                key: project.key,
                name: project.name,
                created_by: project.created_by,
                member_ids: members.into_iter().map(|m| m.user_id).collect(),
                created_at: project.created_at.with_timezone(&Utc),
            })
            .collect())
    }
}
