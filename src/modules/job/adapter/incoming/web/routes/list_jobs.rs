use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::ErrorResponse;
use crate::job::application::domain::entities::{Job, JobFilters, JobLevel, JobType};
use crate::job::application::ports::incoming::use_cases::ListJobsError;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{JobPagination, PageRequest, DEFAULT_PAGE_SIZE};
use crate::shared::validation::{non_blank, FieldError};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListJobsQuery {
    /// 1-indexed page number (default 1).
    pub page: Option<u64>,
    /// Page size, clamped to 1..=50 (default 10).
    pub limit: Option<u64>,
    /// Matches title, company or description.
    pub search: Option<String>,
    /// Matches any tag.
    pub technology: Option<String>,
    /// `remote` selects remote postings; anything else matches the location text.
    pub location: Option<String>,
    pub level: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
}

impl ListJobsQuery {
    fn into_filters(self) -> Result<(JobFilters, PageRequest), Vec<FieldError>> {
        let mut errors = Vec::new();

        let level = match non_blank(self.level.as_deref()).map(|l| l.parse::<JobLevel>()) {
            None => None,
            Some(Ok(level)) => Some(level),
            Some(Err(e)) => {
                errors.push(FieldError::new("level", &e.to_string()));
                None
            }
        };

        let job_type = match non_blank(self.job_type.as_deref()).map(|t| t.parse::<JobType>()) {
            None => None,
            Some(Ok(job_type)) => Some(job_type),
            Some(Err(e)) => {
                errors.push(FieldError::new("type", &e.to_string()));
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let filters = JobFilters {
            search: non_blank(self.search.as_deref()),
            technology: non_blank(self.technology.as_deref()),
            location: non_blank(self.location.as_deref()),
            level,
            job_type,
        };

        Ok((
            filters,
            PageRequest::new(self.page, self.limit, DEFAULT_PAGE_SIZE),
        ))
    }
}

#[derive(Serialize, ToSchema)]
pub struct JobListResponse {
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Job>,
    #[schema(value_type = Object)]
    pub pagination: JobPagination,
}

/// List live postings
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = "jobs",
    params(ListJobsQuery),
    responses(
        (status = 200, description = "Page of live postings, newest first", body = JobListResponse),
        (status = 400, description = "Unknown level or type", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/jobs")]
pub async fn list_jobs_handler(
    query: web::Query<ListJobsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filters, page) = match query.into_inner().into_filters() {
        Ok(parsed) => parsed,
        Err(details) => return ApiResponse::validation_error("Invalid filters", details),
    };

    match data.jobs.list.execute(filters, page).await {
        Ok(result) => ApiResponse::ok_body(JobListResponse {
            pagination: JobPagination::from(&result),
            data: result.items,
        }),
        Err(ListJobsError::QueryFailed(msg)) => {
            error!("Failed to list jobs: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
