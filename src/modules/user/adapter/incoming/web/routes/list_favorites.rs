use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The caller's favorite postings that are still live
#[utoipa::path(
    get,
    path = "/api/users/favorites",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Favorite postings"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/favorites")]
pub async fn list_favorites_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.users.favorites.execute(user.user_id()).await {
        Ok(jobs) => ApiResponse::success(jobs),
        Err(e) => {
            error!(user_id = %user.user_id(), "Failed to list favorites: {}", e);
            ApiResponse::internal_error()
        }
    }
}
