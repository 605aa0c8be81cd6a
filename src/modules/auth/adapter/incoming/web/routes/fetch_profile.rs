use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::Account;
use crate::auth::application::ports::outgoing::user_activity_query::{
    ApplicationSummary, FavoriteSummary,
};
use crate::auth::application::use_cases::fetch_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MeUser {
    #[serde(flatten)]
    account: Account,
    applications: Vec<ApplicationSummary>,
    favorite_jobs: Vec<FavoriteSummary>,
}

#[derive(Serialize)]
struct MeResponse {
    user: MeUser,
}

/// Current account with its application history and favorites
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn get_current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.fetch_profile.execute(user.user_id()).await {
        Ok(view) => ApiResponse::ok_body(MeResponse {
            user: MeUser {
                account: view.account,
                applications: view.activity.applications,
                favorite_jobs: view.activity.favorite_jobs,
            },
        }),
        Err(FetchProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(FetchProfileError::QueryError(e)) => {
            error!(user_id = %user.user_id(), error = %e, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}
