use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::job::application::domain::entities::{Job, NewJob};
use crate::job::application::ports::outgoing::{JobRepository, JobRepositoryError};

use super::sea_orm_entity::jobs::{ActiveModel, Column, Entity};

#[derive(Clone)]
pub struct JobRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JobRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> JobRepositoryError {
    JobRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl JobRepository for JobRepositoryPostgres {
    async fn create(&self, job: NewJob) -> Result<Job, JobRepositoryError> {
        let model = ActiveModel::from_new_job(job, Utc::now())
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        debug!(job_id = %model.id, "Job row inserted");
        model
            .into_job()
            .map_err(JobRepositoryError::SerializationError)
    }

    async fn increment_views(&self, job_id: Uuid) -> Result<(), JobRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::Views, Expr::col(Column::Views).add(1))
            .filter(Column::Id.eq(job_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(JobRepositoryError::NotFound);
        }
        Ok(())
    }
}
