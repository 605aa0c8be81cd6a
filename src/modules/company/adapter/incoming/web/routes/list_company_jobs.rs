use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::PostingManager;
use crate::company::application::domain::entities::{CompanyJob, CompanyStats};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{JobPagination, PageRequest, DEFAULT_PAGE_SIZE};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompanyJobsQuery {
    pub page: Option<u64>,
    /// Default 10, at most 50.
    pub limit: Option<u64>,
}

#[derive(Serialize, ToSchema)]
pub struct CompanyJobsResponse {
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<CompanyJob>,
    #[schema(value_type = Object)]
    pub stats: CompanyStats,
    #[schema(value_type = Object)]
    pub pagination: JobPagination,
}

/// List the caller's postings
///
/// Each posting carries its applications. `stats` covers every posting the
/// caller owns, not just the current page.
#[utoipa::path(
    get,
    path = "/api/companies/jobs",
    tag = "companies",
    params(CompanyJobsQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Owned postings", body = CompanyJobsResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Company or admin role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/companies/jobs")]
pub async fn list_company_jobs_handler(
    manager: PostingManager,
    query: web::Query<CompanyJobsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::new(query.page, query.limit, DEFAULT_PAGE_SIZE);

    match data
        .company
        .list_jobs
        .execute(manager.user_id(), page)
        .await
    {
        Ok(result) => {
            let pagination = JobPagination::from(&result.jobs);
            ApiResponse::ok_body(CompanyJobsResponse {
                data: result.jobs.items,
                stats: result.stats,
                pagination,
            })
        }
        Err(e) => {
            error!(user_id = %manager.user_id(), "Failed to list company jobs: {}", e);
            ApiResponse::internal_error()
        }
    }
}
