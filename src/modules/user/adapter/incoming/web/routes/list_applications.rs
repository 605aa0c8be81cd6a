use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The caller's applications
///
/// Only applications to postings that are still live are listed.
#[utoipa::path(
    get,
    path = "/api/users/applications",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Applications, newest first"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/applications")]
pub async fn list_applications_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.users.applications.execute(user.user_id()).await {
        Ok(applications) => ApiResponse::success(applications),
        Err(e) => {
            error!(user_id = %user.user_id(), "Failed to list applications: {}", e);
            ApiResponse::internal_error()
        }
    }
}
