use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::PostingManager;
use crate::job::application::domain::entities::Salary;
use crate::job::application::ports::incoming::use_cases::{CreateJobError, CreateJobInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalaryDto {
    pub min: Option<i64>,
    pub max: Option<i64>,
    /// Defaults to `USD`.
    pub currency: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    #[schema(example = "Senior Rust Engineer")]
    pub job_title: Option<String>,
    #[schema(example = "Acme")]
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub job_description: Option<String>,
    pub job_excerpt: Option<String>,
    #[serde(default)]
    pub job_tags: Vec<String>,
    #[schema(example = "full-time")]
    pub job_type: Option<String>,
    #[schema(example = "mid")]
    pub job_level: Option<String>,
    #[schema(example = "Remote")]
    pub job_geo: Option<String>,
    pub is_remote: Option<bool>,
    pub salary: Option<SalaryDto>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[schema(example = "https://acme.io/careers/rust")]
    pub url: Option<String>,
    pub application_url: Option<String>,
    pub job_industry: Option<String>,
    pub company_size: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<CreateJobRequest> for CreateJobInput {
    fn from(req: CreateJobRequest) -> Self {
        CreateJobInput {
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
        }
    }
}

/// Publish a posting
///
/// Company and admin accounts only. The posting is owned by the caller.
#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = "jobs",
    request_body = CreateJobRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Job created"),
        (status = 400, description = "Invalid job data", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Role may not publish postings", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/jobs")]
pub async fn create_job_handler(
    manager: PostingManager,
    req: web::Json<CreateJobRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner_id = manager.user_id();

    match data
        .jobs
        .create
        .execute(owner_id, manager.account.role, req.into_inner().into())
        .await
    {
        Ok(job) => {
            info!(job_id = %job.id, owner_id = %owner_id, "Job created");
            ApiResponse::created("Job created successfully", job)
        }
        Err(CreateJobError::Validation(details)) => {
            ApiResponse::validation_error("Invalid job data", details)
        }
        Err(CreateJobError::Forbidden) => {
            warn!(user_id = %owner_id, "Posting rejected for role");
            ApiResponse::forbidden("FORBIDDEN", "Only companies can publish jobs")
        }
        Err(CreateJobError::RepositoryError(msg)) => {
            error!("Failed to create job: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
