use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::ErrorResponse;
use crate::job::application::domain::entities::RandomJob;
use crate::job::application::ports::incoming::use_cases::{
    ListRandomJobsError, DEFAULT_RANDOM_COUNT,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RandomJobsQuery {
    /// Number of postings to return, clamped to 1..=50. Missing, zero or
    /// unparsable values fall back to 25.
    #[param(value_type = Option<u32>)]
    pub count: Option<String>,
}

impl RandomJobsQuery {
    pub fn requested_count(&self) -> u32 {
        self.count
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|count| *count > 0)
            .unwrap_or(DEFAULT_RANDOM_COUNT)
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RandomJobsResponse {
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<RandomJob>,
    pub count: usize,
    pub featured_techs: Vec<String>,
}

/// Mixed feed across random technologies
///
/// Best effort: failing or slow upstream lookups only shrink the external
/// share, and the remainder is filled from local live postings.
#[utoipa::path(
    get,
    path = "/api/jobs/random",
    tag = "jobs",
    params(RandomJobsQuery),
    responses(
        (status = 200, description = "Shuffled postings", body = RandomJobsResponse),
        (status = 500, description = "Local backfill failed", body = ErrorResponse),
    )
)]
#[get("/api/jobs/random")]
pub async fn list_random_jobs_handler(
    query: web::Query<RandomJobsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let count = query.requested_count();

    match data.jobs.random.execute(count).await {
        Ok(result) => ApiResponse::ok_body(RandomJobsResponse {
            count: result.jobs.len(),
            data: result.jobs,
            featured_techs: result.featured_techs,
        }),
        Err(ListRandomJobsError::BackfillFailed(msg)) => {
            error!("Random jobs backfill failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
