use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::PostingManager;
use crate::company::application::domain::entities::ApplicantEntry;
use crate::company::application::ports::incoming::use_cases::DEFAULT_APPLICANT_PAGE_SIZE;
use crate::job::application::domain::entities::ApplicationStatus;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{ApplicationPagination, PageRequest};
use crate::shared::validation::{non_blank, FieldError};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListApplicantsQuery {
    pub page: Option<u64>,
    /// Default 20, at most 50.
    pub limit: Option<u64>,
    /// One of applied, viewed, interview, rejected, accepted.
    pub status: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ApplicantListResponse {
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<ApplicantEntry>,
    #[schema(value_type = Object)]
    pub pagination: ApplicationPagination,
}

/// List applicants across the caller's postings
#[utoipa::path(
    get,
    path = "/api/companies/applications",
    tag = "companies",
    params(ListApplicantsQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Applicants, newest first", body = ApplicantListResponse),
        (status = 400, description = "Unknown status filter", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Company or admin role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/companies/applications")]
pub async fn list_applicants_handler(
    manager: PostingManager,
    query: web::Query<ListApplicantsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let status = match non_blank(query.status.as_deref()).map(|s| s.parse::<ApplicationStatus>()) {
        None => None,
        Some(Ok(status)) => Some(status),
        Some(Err(e)) => {
            return ApiResponse::validation_error(
                "Invalid query parameters",
                vec![FieldError::new("status", &e.to_string())],
            )
        }
    };
    let page = PageRequest::new(query.page, query.limit, DEFAULT_APPLICANT_PAGE_SIZE);

    match data
        .company
        .list_applicants
        .execute(manager.user_id(), status, page)
        .await
    {
        Ok(result) => {
            let pagination = ApplicationPagination::from(&result);
            ApiResponse::ok_body(ApplicantListResponse {
                data: result.items,
                pagination,
            })
        }
        Err(e) => {
            error!(user_id = %manager.user_id(), "Failed to list applicants: {}", e);
            ApiResponse::internal_error()
        }
    }
}
