use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, QueryResult, Statement};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::user_activity_query::{
    ApplicationSummary, FavoriteSummary, UserActivity, UserActivityQuery, UserActivityQueryError,
};

/// Read view over `job_applications` and `favorite_jobs` for the "me" endpoint.
#[derive(Clone)]
pub struct UserActivityPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserActivityPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn applications_stmt(user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                a.job_id,
                j.job_title,
                j.company_name,
                a.status,
                a.applied_at
            FROM job_applications a
            INNER JOIN jobs j ON j.id = a.job_id
            WHERE a.user_id = $1
            ORDER BY a.applied_at DESC
            "#,
            vec![user_id.into()],
        )
    }

    fn favorites_stmt(user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                f.job_id,
                j.job_title,
                j.company_name
            FROM favorite_jobs f
            LEFT JOIN jobs j ON j.id = f.job_id
            WHERE f.user_id = $1
            ORDER BY f.created_at ASC
            "#,
            vec![user_id.into()],
        )
    }

    fn map_db_err(e: DbErr) -> UserActivityQueryError {
        UserActivityQueryError::DatabaseError(e.to_string())
    }

    fn application_from_row(row: &QueryResult) -> Result<ApplicationSummary, DbErr> {
        let applied_at: chrono::DateTime<chrono::FixedOffset> = row.try_get("", "applied_at")?;
        Ok(ApplicationSummary {
            job_id: row.try_get("", "job_id")?,
            job_title: row.try_get("", "job_title")?,
            company_name: row.try_get("", "company_name")?,
            status: row.try_get("", "status")?,
            applied_at: applied_at.with_timezone(&chrono::Utc),
        })
    }

    fn favorite_from_row(row: &QueryResult) -> Result<FavoriteSummary, DbErr> {
        Ok(FavoriteSummary {
            job_id: row.try_get("", "job_id")?,
            job_title: row.try_get("", "job_title")?,
            company_name: row.try_get("", "company_name")?,
        })
    }
}

#[async_trait]
impl UserActivityQuery for UserActivityPostgres {
    async fn activity_for(&self, user_id: Uuid) -> Result<UserActivity, UserActivityQueryError> {
        let application_rows = self
            .db
            .query_all(Self::applications_stmt(user_id))
            .await
            .map_err(Self::map_db_err)?;
        let favorite_rows = self
            .db
            .query_all(Self::favorites_stmt(user_id))
            .await
            .map_err(Self::map_db_err)?;

        let applications = application_rows
            .iter()
            .map(Self::application_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Self::map_db_err)?;
        let favorite_jobs = favorite_rows
            .iter()
            .map(Self::favorite_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Self::map_db_err)?;

        Ok(UserActivity {
            applications,
            favorite_jobs,
        })
    }
}
