use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::job::application::domain::entities::{
    like_pattern, Job, JobDetail, JobFilters, LocationFilter, PostedBy,
};
use crate::job::application::ports::outgoing::{JobQuery, JobQueryError};
use crate::shared::pagination::{PageRequest, PageResult};

use super::sea_orm_entity::jobs::{self, Column, Entity};

#[derive(Clone)]
pub struct JobQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl JobQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// `is_active AND expires_at > now`, the public visibility rule.
pub fn live_condition(now: DateTime<Utc>) -> Condition {
    Condition::all()
        .add(Column::IsActive.eq(true))
        .add(Column::ExpiresAt.gt(now.fixed_offset()))
}

/// Case-insensitive substring match against any element of `job_tags`.
pub fn tag_matches(pattern: String) -> sea_orm::sea_query::SimpleExpr {
    Expr::cust_with_values(
        "EXISTS (SELECT 1 FROM jsonb_array_elements_text(jobs.job_tags) AS t(tag) WHERE t.tag ILIKE $1)",
        [pattern],
    )
}

fn apply_filters(mut query: Select<Entity>, filters: &JobFilters) -> Select<Entity> {
    if let Some(search) = &filters.search {
        let pattern = like_pattern(search);
        query = query.filter(
            Condition::any()
                .add(Expr::col(Column::JobTitle).ilike(&pattern))
                .add(Expr::col(Column::CompanyName).ilike(&pattern))
                .add(Expr::col(Column::JobDescription).ilike(&pattern)),
        );
    }

    if let Some(technology) = &filters.technology {
        query = query.filter(tag_matches(like_pattern(technology)));
    }

    match filters.location_filter() {
        Some(LocationFilter::RemoteOnly) => query = query.filter(Column::IsRemote.eq(true)),
        Some(LocationFilter::Geo(geo)) => {
            query = query.filter(Expr::col(Column::JobGeo).ilike(like_pattern(geo)))
        }
        None => {}
    }

    if let Some(level) = filters.level {
        query = query.filter(Column::JobLevel.eq(level.as_str()));
    }
    if let Some(job_type) = filters.job_type {
        query = query.filter(Column::JobType.eq(job_type.as_str()));
    }

    query
}

#[async_trait]
impl JobQuery for JobQueryPostgres {
    async fn list_live(
        &self,
        filters: &JobFilters,
        page: PageRequest,
        now: DateTime<Utc>,
    ) -> Result<PageResult<Job>, JobQueryError> {
        let query = apply_filters(Entity::find().filter(live_condition(now)), filters)
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = models
            .into_iter()
            .map(to_job)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(items, page, total))
    }

    async fn find_detail(&self, job_id: Uuid) -> Result<Option<JobDetail>, JobQueryError> {
        let Some(model) = Entity::find_by_id(job_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let job = to_job(model)?;

        let posted_by = match job.posted_by {
            Some(owner_id) => users::Entity::find_by_id(owner_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .map(|owner| PostedBy {
                    id: owner.id,
                    name: owner.name,
                    email: owner.email,
                }),
            None => None,
        };

        Ok(Some(JobDetail { job, posted_by }))
    }

    async fn exists(&self, job_id: Uuid) -> Result<bool, JobQueryError> {
        let count = Entity::find_by_id(job_id)
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }
}

pub(crate) fn to_job(model: jobs::Model) -> Result<Job, JobQueryError> {
    model.into_job().map_err(JobQueryError::SerializationError)
}

fn map_db_err(e: DbErr) -> JobQueryError {
    JobQueryError::DatabaseError(e.to_string())
}
