use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Personal dashboard
///
/// Counters, profile completeness, recent applications, a few favorites and
/// postings recommended from the caller's preferred technologies.
#[utoipa::path(
    get,
    path = "/api/users/dashboard",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard data"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/dashboard")]
pub async fn user_dashboard_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.users.dashboard.execute(&user.account).await {
        Ok(dashboard) => ApiResponse::success(dashboard),
        Err(e) => {
            error!(user_id = %user.user_id(), "Failed to build user dashboard: {}", e);
            ApiResponse::internal_error()
        }
    }
}
