use actix_web::{put, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::PostingManager;
use crate::company::application::ports::incoming::use_cases::{
    UpdateCompanyJobError, UpdateCompanyJobInput,
};
use crate::job::adapter::incoming::web::routes::SalaryDto;
use crate::job::application::domain::entities::Salary;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Partial posting update. `postedBy` and the counters cannot be changed
/// and are ignored if sent.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub job_description: Option<String>,
    pub job_excerpt: Option<String>,
    pub job_tags: Option<Vec<String>>,
    pub job_type: Option<String>,
    pub job_level: Option<String>,
    pub job_geo: Option<String>,
    pub is_remote: Option<bool>,
    pub salary: Option<SalaryDto>,
    pub requirements: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub url: Option<String>,
    pub application_url: Option<String>,
    pub job_industry: Option<String>,
    pub company_size: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

impl From<UpdateJobRequest> for UpdateCompanyJobInput {
    fn from(req: UpdateJobRequest) -> Self {
        UpdateCompanyJobInput {
            job_title: req.job_title,
            company_name: req.company_name,
            company_logo: req.company_logo,
            job_description: req.job_description,
            job_excerpt: req.job_excerpt,
            job_tags: req.job_tags,
            job_type: req.job_type,
            job_level: req.job_level,
            job_geo: req.job_geo,
            is_remote: req.is_remote,
            salary: req.salary.map(|s| Salary {
                min: s.min,
                max: s.max,
                currency: s
                    .currency
                    .map(|c| c.trim().to_uppercase())
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| "USD".to_string()),
            }),
            requirements: req.requirements,
            benefits: req.benefits,
            url: req.url,
            application_url: req.application_url,
            job_industry: req.job_industry,
            company_size: req.company_size,
            expires_at: req.expires_at,
            is_active: req.is_active,
        }
    }
}

/// Edit an owned posting
#[utoipa::path(
    put,
    path = "/api/companies/jobs/{jobId}",
    tag = "companies",
    params(("jobId" = Uuid, Path, description = "Job id")),
    request_body = UpdateJobRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Job updated"),
        (status = 400, description = "Invalid job data", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Company or admin role required", body = ErrorResponse),
        (status = 404, description = "Not found or not owned", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/companies/jobs/{jobId}")]
pub async fn update_company_job_handler(
    manager: PostingManager,
    path: web::Path<Uuid>,
    req: web::Json<UpdateJobRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = path.into_inner();

    match data
        .company
        .update_job
        .execute(
            manager.user_id(),
            job_id,
            req.into_inner().into(),
        )
        .await
    {
        Ok(job) => ApiResponse::success_with_message("Job updated successfully", job),
        Err(UpdateCompanyJobError::Validation(details)) => {
            ApiResponse::validation_error("Validation failed", details)
        }
        Err(UpdateCompanyJobError::NotFound) => ApiResponse::not_found(
            "JOB_NOT_FOUND",
            "Job not found or you don't have permission to edit it",
        ),
        Err(UpdateCompanyJobError::RepositoryError(msg)) => {
            error!(job_id = %job_id, "Failed to update job: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
