use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::job::application::ports::outgoing::{FavoriteRepository, FavoriteRepositoryError};

use super::sea_orm_entity::favorite_jobs::{Column, Entity};

#[derive(Clone)]
pub struct FavoriteRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FavoriteRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> FavoriteRepositoryError {
    FavoriteRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryPostgres {
    async fn remove(&self, user_id: Uuid, job_id: Uuid) -> Result<bool, FavoriteRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::JobId.eq(job_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn add(&self, user_id: Uuid, job_id: Uuid) -> Result<(), FavoriteRepositoryError> {
        self.db
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"
                INSERT INTO favorite_jobs (user_id, job_id)
                VALUES ($1, $2)
                ON CONFLICT (user_id, job_id) DO NOTHING
                "#,
                vec![user_id.into(), job_id.into()],
            ))
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}
