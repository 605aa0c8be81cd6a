use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::job::application::ports::incoming::use_cases::ToggleFavoriteError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavoriteResponse {
    pub message: String,
    pub is_favorited: bool,
}

/// Add or remove a posting from the caller's favorites
#[utoipa::path(
    post,
    path = "/api/jobs/{id}/favorite",
    tag = "jobs",
    params(("id" = Uuid, Path, description = "Job id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "New favorite state", body = ToggleFavoriteResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/jobs/{id}/favorite")]
pub async fn toggle_favorite_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = path.into_inner();

    match data.jobs.toggle_favorite.execute(user.user_id(), job_id).await {
        Ok(is_favorited) => ApiResponse::ok_body(ToggleFavoriteResponse {
            message: if is_favorited {
                "Job added to favorites".to_string()
            } else {
                "Job removed from favorites".to_string()
            },
            is_favorited,
        }),
        Err(ToggleFavoriteError::RepositoryError(msg)) => {
            error!(job_id = %job_id, "Failed to toggle favorite: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
