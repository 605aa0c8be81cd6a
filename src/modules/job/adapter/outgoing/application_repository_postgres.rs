use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::job::application::domain::entities::{ApplicationStatus, NewApplication};
use crate::job::application::ports::outgoing::{
    ApplicationRepository, ApplicationRepositoryError,
};

use super::sea_orm_entity::job_applications::{ActiveModel, Column, Entity};

#[derive(Clone)]
pub struct ApplicationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ApplicationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn is_unique_violation(e: &DbErr) -> bool {
    let err_str = e.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

fn map_db_err(e: DbErr) -> ApplicationRepositoryError {
    if is_unique_violation(&e) {
        return ApplicationRepositoryError::AlreadyApplied;
    }
    ApplicationRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ApplicationRepository for ApplicationRepositoryPostgres {
    async fn has_applied(
        &self,
        job_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, ApplicationRepositoryError> {
        let count = Entity::find()
            .filter(Column::JobId.eq(job_id))
            .filter(Column::UserId.eq(user_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn create(&self, application: NewApplication) -> Result<(), ApplicationRepositoryError> {
        let now = Utc::now().fixed_offset();

        ActiveModel {
            id: Set(Uuid::new_v4()),
            job_id: Set(application.job_id),
            user_id: Set(application.user_id),
            status: Set(ApplicationStatus::Applied.as_str().to_string()),
            resume: Set(application.resume),
            cover_letter: Set(application.cover_letter),
            applied_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(())
    }
}
