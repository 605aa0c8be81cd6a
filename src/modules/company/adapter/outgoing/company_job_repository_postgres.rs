use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use tracing::debug;
use uuid::Uuid;

use crate::company::application::domain::entities::{JobPatch, OwnerScope};
use crate::company::application::ports::outgoing::{
    CompanyJobRepository, CompanyRepositoryError,
};
use crate::job::adapter::outgoing::sea_orm_entity::{job_applications, jobs};
use crate::job::application::domain::entities::{ApplicationStatus, Job};

use super::company_job_query_postgres::scope_condition;

#[derive(Clone)]
pub struct CompanyJobRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CompanyJobRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CompanyRepositoryError {
    CompanyRepositoryError::DatabaseError(e.to_string())
}

fn apply_patch(active: &mut jobs::ActiveModel, patch: JobPatch) {
    if let Some(v) = patch.job_title {
        active.job_title = Set(v);
    }
    if let Some(v) = patch.company_name {
        active.company_name = Set(v);
    }
    if let Some(v) = patch.company_logo {
        active.company_logo = Set(Some(v));
    }
    if let Some(v) = patch.job_description {
        active.job_description = Set(v);
    }
    if let Some(v) = patch.job_excerpt {
        active.job_excerpt = Set(Some(v));
    }
    if let Some(v) = patch.job_tags {
        active.job_tags = Set(serde_json::json!(v));
    }
    if let Some(v) = patch.job_type {
        active.job_type = Set(v.as_str().to_string());
    }
    if let Some(v) = patch.job_level {
        active.job_level = Set(v.as_str().to_string());
    }
    if let Some(v) = patch.job_geo {
        active.job_geo = Set(v);
    }
    if let Some(v) = patch.is_remote {
        active.is_remote = Set(v);
    }
    if let Some(salary) = patch.salary {
        active.salary_min = Set(salary.min);
        active.salary_max = Set(salary.max);
        active.salary_currency = Set(salary.currency);
    }
    if let Some(v) = patch.requirements {
        active.requirements = Set(serde_json::json!(v));
    }
    if let Some(v) = patch.benefits {
        active.benefits = Set(serde_json::json!(v));
    }
    if let Some(v) = patch.url {
        active.url = Set(v);
    }
    if let Some(v) = patch.application_url {
        active.application_url = Set(Some(v));
    }
    if let Some(v) = patch.job_industry {
        active.job_industry = Set(Some(v));
    }
    if let Some(v) = patch.company_size {
        active.company_size = Set(Some(v));
    }
    if let Some(v) = patch.expires_at {
        active.expires_at = Set(v.fixed_offset());
    }
    if let Some(v) = patch.is_active {
        active.is_active = Set(v);
    }
}

#[async_trait]
impl CompanyJobRepository for CompanyJobRepositoryPostgres {
    async fn update_job(
        &self,
        scope: OwnerScope,
        job_id: Uuid,
        patch: JobPatch,
    ) -> Result<Job, CompanyRepositoryError> {
        let model = jobs::Entity::find_by_id(job_id)
            .filter(scope_condition(scope))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CompanyRepositoryError::JobNotFound)?;

        if patch.is_empty() {
            return model
                .into_job()
                .map_err(CompanyRepositoryError::SerializationError);
        }

        let mut active: jobs::ActiveModel = model.into();
        apply_patch(&mut active, patch);
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;
        debug!(job_id = %updated.id, "Job row updated");

        updated
            .into_job()
            .map_err(CompanyRepositoryError::SerializationError)
    }

    async fn deactivate_job(
        &self,
        scope: OwnerScope,
        job_id: Uuid,
    ) -> Result<(), CompanyRepositoryError> {
        let result = jobs::Entity::update_many()
            .col_expr(jobs::Column::IsActive, Expr::value(false))
            .col_expr(jobs::Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(jobs::Column::Id.eq(job_id))
            .filter(scope_condition(scope))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CompanyRepositoryError::JobNotFound);
        }
        Ok(())
    }

    async fn update_application_status(
        &self,
        scope: OwnerScope,
        job_id: Uuid,
        user_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<(), CompanyRepositoryError> {
        let in_scope = jobs::Entity::find_by_id(job_id)
            .filter(scope_condition(scope))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;
        if in_scope == 0 {
            return Err(CompanyRepositoryError::JobNotFound);
        }

        let result = job_applications::Entity::update_many()
            .col_expr(
                job_applications::Column::Status,
                Expr::value(status.as_str()),
            )
            .col_expr(
                job_applications::Column::UpdatedAt,
                Expr::value(Utc::now().fixed_offset()),
            )
            .filter(job_applications::Column::JobId.eq(job_id))
            .filter(job_applications::Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CompanyRepositoryError::ApplicationNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::application::domain::entities::{JobLevel, Salary};
    use crate::tests::support::fixtures::job_model;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> BTreeMap<String, Value> {
        BTreeMap::from([("num_items".to_string(), Value::BigInt(Some(n)))])
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[test]
    fn patch_sets_only_present_columns() {
        let mut active: jobs::ActiveModel = job_model(None).into();
        apply_patch(
            &mut active,
            JobPatch {
                job_level: Some(JobLevel::Senior),
                salary: Some(Salary {
                    min: Some(100),
                    max: None,
                    currency: "EUR".into(),
                }),
                ..Default::default()
            },
        );

        assert!(active.job_level.is_set());
        assert_eq!(active.job_level.clone().unwrap(), "senior");
        assert_eq!(active.salary_currency.clone().unwrap(), "EUR");
        assert!(!active.job_title.is_set());
        assert!(!active.is_active.is_set());
    }

    #[tokio::test]
    async fn update_returns_stored_row() {
        let owner = Uuid::new_v4();
        let stored = job_model(Some(owner));
        let mut updated = stored.clone();
        updated.job_title = "Staff Engineer".into();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored.clone()]])
            .append_query_results(vec![vec![updated]])
            .into_connection();

        let job = CompanyJobRepositoryPostgres::new(Arc::new(db))
            .update_job(
                OwnerScope::Owner(owner),
                stored.id,
                JobPatch {
                    job_title: Some("Staff Engineer".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(job.job_title, "Staff Engineer");
    }

    #[tokio::test]
    async fn update_outside_scope_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<jobs::Model>::new()])
            .into_connection();

        let result = CompanyJobRepositoryPostgres::new(Arc::new(db))
            .update_job(
                OwnerScope::Owner(Uuid::new_v4()),
                Uuid::new_v4(),
                JobPatch::default(),
            )
            .await;

        assert!(matches!(result, Err(CompanyRepositoryError::JobNotFound)));
    }

    #[tokio::test]
    async fn deactivate_reports_missing_posting() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(1), exec(0)])
            .into_connection();
        let repo = CompanyJobRepositoryPostgres::new(Arc::new(db));

        assert!(repo.deactivate_job(OwnerScope::Any, Uuid::new_v4()).await.is_ok());
        assert!(matches!(
            repo.deactivate_job(OwnerScope::Any, Uuid::new_v4()).await,
            Err(CompanyRepositoryError::JobNotFound)
        ));
    }

    #[tokio::test]
    async fn status_update_distinguishes_job_and_application() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(0)], vec![count_row(1)]])
            .append_exec_results(vec![exec(0)])
            .into_connection();
        let repo = CompanyJobRepositoryPostgres::new(Arc::new(db));
        let scope = OwnerScope::Owner(Uuid::new_v4());

        assert!(matches!(
            repo.update_application_status(
                scope,
                Uuid::new_v4(),
                Uuid::new_v4(),
                ApplicationStatus::Viewed
            )
            .await,
            Err(CompanyRepositoryError::JobNotFound)
        ));
        assert!(matches!(
            repo.update_application_status(
                scope,
                Uuid::new_v4(),
                Uuid::new_v4(),
                ApplicationStatus::Viewed
            )
            .await,
            Err(CompanyRepositoryError::ApplicationNotFound)
        ));
    }
}
