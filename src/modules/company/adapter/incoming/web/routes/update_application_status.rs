use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::PostingManager;
use crate::company::application::ports::incoming::use_cases::UpdateApplicationStatusError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct StatusUpdateRequest {
    #[schema(example = "interview")]
    pub status: Option<String>,
}

/// Change an application's status
#[utoipa::path(
    put,
    path = "/api/companies/applications/{jobId}/{userId}/status",
    tag = "companies",
    params(
        ("jobId" = Uuid, Path, description = "Job id"),
        ("userId" = Uuid, Path, description = "Applicant id"),
    ),
    request_body = StatusUpdateRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Status updated"),
        (status = 400, description = "Unknown status", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Company or admin role required", body = ErrorResponse),
        (status = 404, description = "Job or application not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/companies/applications/{jobId}/{userId}/status")]
pub async fn update_application_status_handler(
    manager: PostingManager,
    path: web::Path<(Uuid, Uuid)>,
    req: web::Json<StatusUpdateRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (job_id, applicant_id) = path.into_inner();

    match data
        .company
        .update_application_status
        .execute(
            manager.user_id(),
            job_id,
            applicant_id,
            req.into_inner().status,
        )
        .await
    {
        Ok(status) => {
            info!(job_id = %job_id, applicant_id = %applicant_id, status = %status, "Application status updated");
            ApiResponse::message(&format!("Status updated to \"{status}\""))
        }
        Err(UpdateApplicationStatusError::Validation(details)) => {
            ApiResponse::validation_error("Invalid status", details)
        }
        Err(UpdateApplicationStatusError::JobNotFound) => ApiResponse::not_found(
            "JOB_NOT_FOUND",
            "Job not found or you don't have permission",
        ),
        Err(UpdateApplicationStatusError::ApplicationNotFound) => {
            ApiResponse::not_found("APPLICATION_NOT_FOUND", "Application not found")
        }
        Err(UpdateApplicationStatusError::RepositoryError(msg)) => {
            error!(job_id = %job_id, "Failed to update application status: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
