use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QueryResult, QuerySelect, Statement,
    Value,
};
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserProfile;
use crate::company::application::domain::entities::{
    ApplicantEntry, ApplicantProfile, ApplicantSummary, CompanyJob, CompanyStats, JobApplicant,
    OwnerScope, RecentApplicant, TopJob,
};
use crate::company::application::ports::outgoing::{CompanyJobQuery, CompanyQueryError};
use crate::job::adapter::outgoing::sea_orm_entity::{job_applications, jobs};
use crate::job::application::domain::entities::ApplicationStatus;
use crate::shared::pagination::{PageRequest, PageResult};

/// `posted_by = owner` for owner scopes, no restriction for admins.
pub(crate) fn scope_condition(scope: OwnerScope) -> Condition {
    match scope {
        OwnerScope::Owner(owner_id) => Condition::all().add(jobs::Column::PostedBy.eq(owner_id)),
        OwnerScope::Any => Condition::all(),
    }
}

/// The `$1` bind for `($1::uuid IS NULL OR j.posted_by = $1)`.
fn scope_value(scope: OwnerScope) -> Value {
    scope.owner_id().into()
}

#[derive(Clone)]
pub struct CompanyJobQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CompanyJobQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn applications_for(
        &self,
        job_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<JobApplicant>>, CompanyQueryError> {
        let applications = job_applications::Entity::find()
            .filter(job_applications::Column::JobId.is_in(job_ids))
            .order_by_desc(job_applications::Column::AppliedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if applications.is_empty() {
            return Ok(HashMap::new());
        }

        let mut user_ids: Vec<Uuid> = applications.iter().map(|a| a.user_id).collect();
        user_ids.sort();
        user_ids.dedup();

        let applicants: HashMap<Uuid, ApplicantSummary> = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|u| {
                let phone = u
                    .profile
                    .get("phone")
                    .and_then(|p| p.as_str())
                    .map(str::to_string);
                (
                    u.id,
                    ApplicantSummary {
                        id: u.id,
                        name: u.name,
                        email: u.email,
                        phone,
                    },
                )
            })
            .collect();

        let mut by_job: HashMap<Uuid, Vec<JobApplicant>> = HashMap::new();
        for application in applications {
            let Some(user) = applicants.get(&application.user_id) else {
                continue;
            };
            by_job
                .entry(application.job_id)
                .or_default()
                .push(JobApplicant {
                    user: user.clone(),
                    status: parse_status(&application.status)?,
                    applied_at: application.applied_at.with_timezone(&Utc),
                });
        }

        Ok(by_job)
    }

    fn stats_stmt(scope: OwnerScope) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                COUNT(*)::bigint AS total_jobs,
                COUNT(*) FILTER (WHERE j.is_active)::bigint AS active_jobs,
                COALESCE(SUM(j.views), 0)::bigint AS total_views,
                COALESCE(SUM(j.clicks), 0)::bigint AS total_clicks,
                COALESCE(SUM(ac.applications), 0)::bigint AS total_applications
            FROM jobs j
            LEFT JOIN (
                SELECT job_id, COUNT(*) AS applications
                FROM job_applications
                GROUP BY job_id
            ) ac ON ac.job_id = j.id
            WHERE ($1::uuid IS NULL OR j.posted_by = $1)
            "#,
            vec![scope_value(scope)],
        )
    }

    fn applicants_count_stmt(scope: OwnerScope, status: Option<ApplicationStatus>) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT COUNT(*)::bigint AS total
            FROM job_applications a
            INNER JOIN jobs j ON j.id = a.job_id
            INNER JOIN users u ON u.id = a.user_id
            WHERE ($1::uuid IS NULL OR j.posted_by = $1)
              AND ($2::text IS NULL OR a.status = $2)
            "#,
            vec![scope_value(scope), status_value(status)],
        )
    }

    fn applicants_stmt(
        scope: OwnerScope,
        status: Option<ApplicationStatus>,
        page: PageRequest,
    ) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                a.job_id,
                j.job_title,
                j.company_name,
                a.user_id,
                u.name,
                u.email,
                u.profile,
                a.status,
                a.applied_at,
                a.resume,
                a.cover_letter
            FROM job_applications a
            INNER JOIN jobs j ON j.id = a.job_id
            INNER JOIN users u ON u.id = a.user_id
            WHERE ($1::uuid IS NULL OR j.posted_by = $1)
              AND ($2::text IS NULL OR a.status = $2)
            ORDER BY a.applied_at DESC
            LIMIT $3 OFFSET $4
            "#,
            vec![
                scope_value(scope),
                status_value(status),
                (page.limit() as i64).into(),
                (page.offset() as i64).into(),
            ],
        )
    }

    fn top_jobs_stmt(scope: OwnerScope, limit: u64) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                j.id,
                j.job_title,
                j.views,
                j.clicks,
                (SELECT COUNT(*) FROM job_applications a WHERE a.job_id = j.id)::bigint
                    AS applications
            FROM jobs j
            WHERE ($1::uuid IS NULL OR j.posted_by = $1)
            ORDER BY j.views DESC, j.created_at DESC
            LIMIT $2
            "#,
            vec![scope_value(scope), (limit as i64).into()],
        )
    }

    fn recent_applicants_stmt(scope: OwnerScope, limit: u64) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                a.job_id,
                j.job_title,
                a.user_id,
                u.name,
                u.email,
                u.profile ->> 'phone' AS phone,
                a.status,
                a.applied_at
            FROM job_applications a
            INNER JOIN jobs j ON j.id = a.job_id
            INNER JOIN users u ON u.id = a.user_id
            WHERE ($1::uuid IS NULL OR j.posted_by = $1)
            ORDER BY a.applied_at DESC
            LIMIT $2
            "#,
            vec![scope_value(scope), (limit as i64).into()],
        )
    }
}

fn status_value(status: Option<ApplicationStatus>) -> Value {
    status.map(|s| s.as_str().to_string()).into()
}

fn map_db_err(e: DbErr) -> CompanyQueryError {
    CompanyQueryError::DatabaseError(e.to_string())
}

fn parse_status(raw: &str) -> Result<ApplicationStatus, CompanyQueryError> {
    raw.parse::<ApplicationStatus>()
        .map_err(|e| CompanyQueryError::SerializationError(e.to_string()))
}

fn count(row: &QueryResult, column: &str) -> Result<u64, CompanyQueryError> {
    let value: i64 = row.try_get("", column).map_err(map_db_err)?;
    Ok(u64::try_from(value).unwrap_or(0))
}

fn timestamp(row: &QueryResult, column: &str) -> Result<DateTime<Utc>, CompanyQueryError> {
    let value: DateTime<FixedOffset> = row.try_get("", column).map_err(map_db_err)?;
    Ok(value.with_timezone(&Utc))
}

fn applicant_entry_from_row(row: &QueryResult) -> Result<ApplicantEntry, CompanyQueryError> {
    let profile: serde_json::Value = row.try_get("", "profile").map_err(map_db_err)?;
    let profile: UserProfile = if profile.is_null() {
        UserProfile::default()
    } else {
        serde_json::from_value(profile)
            .map_err(|e| CompanyQueryError::SerializationError(format!("profile: {e}")))?
    };
    let status: String = row.try_get("", "status").map_err(map_db_err)?;

    Ok(ApplicantEntry {
        job_id: row.try_get("", "job_id").map_err(map_db_err)?,
        job_title: row.try_get("", "job_title").map_err(map_db_err)?,
        company_name: row.try_get("", "company_name").map_err(map_db_err)?,
        applicant: ApplicantProfile {
            id: row.try_get("", "user_id").map_err(map_db_err)?,
            name: row.try_get("", "name").map_err(map_db_err)?,
            email: row.try_get("", "email").map_err(map_db_err)?,
            profile,
        },
        status: parse_status(&status)?,
        applied_at: timestamp(row, "applied_at")?,
        resume: row.try_get("", "resume").map_err(map_db_err)?,
        cover_letter: row.try_get("", "cover_letter").map_err(map_db_err)?,
    })
}

fn top_job_from_row(row: &QueryResult) -> Result<TopJob, CompanyQueryError> {
    Ok(TopJob {
        id: row.try_get("", "id").map_err(map_db_err)?,
        job_title: row.try_get("", "job_title").map_err(map_db_err)?,
        views: row.try_get("", "views").map_err(map_db_err)?,
        clicks: row.try_get("", "clicks").map_err(map_db_err)?,
        applications: count(row, "applications")?,
    })
}

fn recent_applicant_from_row(row: &QueryResult) -> Result<RecentApplicant, CompanyQueryError> {
    let status: String = row.try_get("", "status").map_err(map_db_err)?;

    Ok(RecentApplicant {
        job_id: row.try_get("", "job_id").map_err(map_db_err)?,
        job_title: row.try_get("", "job_title").map_err(map_db_err)?,
        applicant: ApplicantSummary {
            id: row.try_get("", "user_id").map_err(map_db_err)?,
            name: row.try_get("", "name").map_err(map_db_err)?,
            email: row.try_get("", "email").map_err(map_db_err)?,
            phone: row.try_get("", "phone").map_err(map_db_err)?,
        },
        status: parse_status(&status)?,
        applied_at: timestamp(row, "applied_at")?,
    })
}

#[async_trait]
impl CompanyJobQuery for CompanyJobQueryPostgres {
    async fn list_owned(
        &self,
        scope: OwnerScope,
        page: PageRequest,
    ) -> Result<PageResult<CompanyJob>, CompanyQueryError> {
        let query = jobs::Entity::find()
            .filter(scope_condition(scope))
            .order_by_desc(jobs::Column::CreatedAt)
            .order_by_desc(jobs::Column::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let jobs = models
            .into_iter()
            .map(|m| m.into_job().map_err(CompanyQueryError::SerializationError))
            .collect::<Result<Vec<_>, _>>()?;

        if jobs.is_empty() {
            return Ok(PageResult::new(Vec::new(), page, total));
        }

        let mut applications = self
            .applications_for(jobs.iter().map(|j| j.id).collect())
            .await?;

        let items = jobs
            .into_iter()
            .map(|job| CompanyJob {
                applications: applications.remove(&job.id).unwrap_or_default(),
                job,
            })
            .collect();

        Ok(PageResult::new(items, page, total))
    }

    async fn stats(&self, scope: OwnerScope) -> Result<CompanyStats, CompanyQueryError> {
        let Some(row) = self
            .db
            .query_one(Self::stats_stmt(scope))
            .await
            .map_err(map_db_err)?
        else {
            return Ok(CompanyStats::default());
        };

        Ok(CompanyStats {
            total_jobs: count(&row, "total_jobs")?,
            active_jobs: count(&row, "active_jobs")?,
            total_views: row.try_get("", "total_views").map_err(map_db_err)?,
            total_clicks: row.try_get("", "total_clicks").map_err(map_db_err)?,
            total_applications: count(&row, "total_applications")?,
        })
    }

    async fn list_applicants(
        &self,
        scope: OwnerScope,
        status: Option<ApplicationStatus>,
        page: PageRequest,
    ) -> Result<PageResult<ApplicantEntry>, CompanyQueryError> {
        let total = match self
            .db
            .query_one(Self::applicants_count_stmt(scope, status))
            .await
            .map_err(map_db_err)?
        {
            Some(row) => count(&row, "total")?,
            None => 0,
        };

        let rows = self
            .db
            .query_all(Self::applicants_stmt(scope, status, page))
            .await
            .map_err(map_db_err)?;

        let items = rows
            .iter()
            .map(applicant_entry_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(items, page, total))
    }

    async fn top_jobs(
        &self,
        scope: OwnerScope,
        limit: u64,
    ) -> Result<Vec<TopJob>, CompanyQueryError> {
        self.db
            .query_all(Self::top_jobs_stmt(scope, limit))
            .await
            .map_err(map_db_err)?
            .iter()
            .map(top_job_from_row)
            .collect()
    }

    async fn recent_applicants(
        &self,
        scope: OwnerScope,
        limit: u64,
    ) -> Result<Vec<RecentApplicant>, CompanyQueryError> {
        self.db
            .query_all(Self::recent_applicants_stmt(scope, limit))
            .await
            .map_err(map_db_err)?
            .iter()
            .map(recent_applicant_from_row)
            .collect()
    }
}
