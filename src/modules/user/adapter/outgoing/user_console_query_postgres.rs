use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::job::adapter::outgoing::job_query_postgres::{live_condition, tag_matches};
use crate::job::adapter::outgoing::sea_orm_entity::{favorite_jobs, job_applications, jobs};
use crate::job::application::domain::entities::{like_pattern, ApplicationStatus, Job};
use crate::user::application::domain::entities::{
    ApplicationJobSummary, ConsoleCounts, UserApplication,
};
use crate::user::application::ports::outgoing::{UserConsoleQuery, UserConsoleQueryError};

#[derive(Clone)]
pub struct UserConsoleQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserConsoleQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Live postings among `ids`, keyed by id.
    async fn live_jobs(
        &self,
        ids: Vec<Uuid>,
        now: DateTime<Utc>,
    ) -> Result<HashMap<Uuid, Job>, UserConsoleQueryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        jobs::Entity::find()
            .filter(jobs::Column::Id.is_in(ids))
            .filter(live_condition(now))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|m| to_job(m).map(|job| (job.id, job)))
            .collect()
    }
}

fn map_db_err(e: DbErr) -> UserConsoleQueryError {
    UserConsoleQueryError::DatabaseError(e.to_string())
}

fn to_job(model: jobs::Model) -> Result<Job, UserConsoleQueryError> {
    model
        .into_job()
        .map_err(UserConsoleQueryError::SerializationError)
}

fn favorited_by(user_id: Uuid) -> sea_orm::sea_query::SimpleExpr {
    Expr::cust_with_values(
        "EXISTS (SELECT 1 FROM favorite_jobs f WHERE f.job_id = jobs.id AND f.user_id = $1)",
        [user_id],
    )
}

fn not_applied_by(user_id: Uuid) -> sea_orm::sea_query::SimpleExpr {
    Expr::cust_with_values(
        "NOT EXISTS (SELECT 1 FROM job_applications a WHERE a.job_id = jobs.id AND a.user_id = $1)",
        [user_id],
    )
}

#[async_trait]
impl UserConsoleQuery for UserConsoleQueryPostgres {
    async fn applications(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<UserApplication>, UserConsoleQueryError> {
        let rows = job_applications::Entity::find()
            .filter(job_applications::Column::UserId.eq(user_id))
            .order_by_desc(job_applications::Column::AppliedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let live = self
            .live_jobs(rows.iter().map(|r| r.job_id).collect(), now)
            .await?;

        let mut applications = Vec::with_capacity(rows.len());
        for row in rows {
            let Some(job) = live.get(&row.job_id) else {
                continue;
            };
            let status = row
                .status
                .parse::<ApplicationStatus>()
                .map_err(|e| UserConsoleQueryError::SerializationError(e.to_string()))?;

            applications.push(UserApplication {
                job_id: row.job_id,
                status,
                applied_at: row.applied_at.with_timezone(&Utc),
                job: ApplicationJobSummary {
                    job_title: job.job_title.clone(),
                    company_name: job.company_name.clone(),
                    job_geo: job.job_geo.clone(),
                    job_type: job.job_type,
                    job_level: job.job_level,
                    created_at: job.created_at,
                },
            });
        }

        Ok(applications)
    }

    async fn favorite_jobs(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
        limit: Option<u64>,
    ) -> Result<Vec<Job>, UserConsoleQueryError> {
        let favorites = favorite_jobs::Entity::find()
            .filter(favorite_jobs::Column::UserId.eq(user_id))
            .order_by_desc(favorite_jobs::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut live = self
            .live_jobs(favorites.iter().map(|f| f.job_id).collect(), now)
            .await?;

        let limit = limit.map_or(usize::MAX, |l| l as usize);
        Ok(favorites
            .into_iter()
            .filter_map(|f| live.remove(&f.job_id))
            .take(limit)
            .collect())
    }

    async fn counts(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<ConsoleCounts, UserConsoleQueryError> {
        let applications = job_applications::Entity::find()
            .filter(job_applications::Column::UserId.eq(user_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let favorites = jobs::Entity::find()
            .filter(live_condition(now))
            .filter(favorited_by(user_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(ConsoleCounts {
            applications,
            favorites,
        })
    }

    async fn recommended_jobs(
        &self,
        user_id: Uuid,
        technologies: &[String],
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Job>, UserConsoleQueryError> {
        let mut query = jobs::Entity::find()
            .filter(live_condition(now))
            .filter(not_applied_by(user_id));

        if !technologies.is_empty() {
            let any_tag = technologies
                .iter()
                .fold(Condition::any(), |cond, tech| {
                    cond.add(tag_matches(like_pattern(tech)))
                });
            query = query.filter(any_tag);
        }

        query
            .order_by_desc(jobs::Column::CreatedAt)
            .order_by_desc(jobs::Column::Id)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_job)
            .collect()
    }
}
