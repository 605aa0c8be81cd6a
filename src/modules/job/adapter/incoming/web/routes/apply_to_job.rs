use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::job::application::ports::incoming::use_cases::{ApplyToJobError, ApplyToJobInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
}

/// Apply to a posting
#[utoipa::path(
    post,
    path = "/api/jobs/{id}/apply",
    tag = "jobs",
    params(("id" = Uuid, Path, description = "Job id")),
    request_body(content = Option<ApplyRequest>, description = "Optional resume and cover letter"),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Application submitted"),
        (status = 400, description = "Already applied", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Job not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/jobs/{id}/apply")]
pub async fn apply_to_job_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    body: Option<web::Json<ApplyRequest>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = path.into_inner();
    let body = body.map(web::Json::into_inner).unwrap_or_default();
    let input = ApplyToJobInput {
        resume: body.resume,
        cover_letter: body.cover_letter,
    };

    match data.jobs.apply.execute(user.user_id(), job_id, input).await {
        Ok(()) => {
            info!(job_id = %job_id, user_id = %user.user_id(), "Applied to job");
            ApiResponse::message("Application submitted successfully")
        }
        Err(ApplyToJobError::JobNotFound) => {
            ApiResponse::not_found("JOB_NOT_FOUND", "Job not found")
        }
        Err(ApplyToJobError::AlreadyApplied) => ApiResponse::bad_request(
            "ALREADY_APPLIED",
            "You have already applied to this job",
        ),
        Err(ApplyToJobError::RepositoryError(msg)) => {
            error!(job_id = %job_id, "Failed to apply: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
