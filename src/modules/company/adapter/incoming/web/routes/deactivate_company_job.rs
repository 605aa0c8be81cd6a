use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::PostingManager;
use crate::company::application::ports::incoming::use_cases::DeactivateCompanyJobError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Deactivate an owned posting
///
/// The posting and its applications stay stored; it just stops being listed.
#[utoipa::path(
    delete,
    path = "/api/companies/jobs/{jobId}",
    tag = "companies",
    params(("jobId" = Uuid, Path, description = "Job id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Job deactivated"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Company or admin role required", body = ErrorResponse),
        (status = 404, description = "Not found or not owned", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/companies/jobs/{jobId}")]
pub async fn deactivate_company_job_handler(
    manager: PostingManager,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = path.into_inner();

    match data
        .company
        .deactivate_job
        .execute(manager.user_id(), manager.account.role, job_id)
        .await
    {
        Ok(()) => ApiResponse::message("Job deactivated successfully"),
        Err(DeactivateCompanyJobError::NotFound) => ApiResponse::not_found(
            "JOB_NOT_FOUND",
            "Job not found or you don't have permission to delete it",
        ),
        Err(DeactivateCompanyJobError::RepositoryError(msg)) => {
            error!(job_id = %job_id, "Failed to deactivate job: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
