use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::job::application::domain::entities::{Job, JobDetail, PostedBy};
use crate::job::application::ports::incoming::use_cases::GetJobError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// A posting with its owner expanded.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetailView {
    #[serde(flatten)]
    pub job: Job,
    pub posted_by: Option<PostedBy>,
}

impl From<JobDetail> for JobDetailView {
    fn from(detail: JobDetail) -> Self {
        Self {
            job: detail.job,
            posted_by: detail.posted_by,
        }
    }
}

/// Fetch one posting
///
/// Counts one view per call, whoever the caller is. Deactivated or expired
/// postings are still returned here.
#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    tag = "jobs",
    params(("id" = Uuid, Path, description = "Job id")),
    responses(
        (status = 200, description = "Posting with `postedBy` resolved"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Job not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/jobs/{id}")]
pub async fn get_job_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    let job_id = path.into_inner();

    match data.jobs.get.execute(job_id).await {
        Ok(detail) => ApiResponse::success(JobDetailView::from(detail)),
        Err(GetJobError::NotFound) => ApiResponse::not_found("JOB_NOT_FOUND", "Job not found"),
        Err(GetJobError::QueryFailed(msg)) => {
            error!(job_id = %job_id, "Failed to load job: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
