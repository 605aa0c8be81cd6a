use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::UpdatePreferencesError;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePreferencesRequest {
    /// `{ jobTypes?, technologies?, salaryRange?, locations? }`; omitted or
    /// `null` clears the stored preferences.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub preferences: serde_json::Value,
}

/// Replace the caller's job preferences
#[utoipa::path(
    put,
    path = "/api/users/preferences",
    tag = "users",
    request_body = UpdatePreferencesRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Stored preferences"),
        (status = 400, description = "Invalid preferences", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/preferences")]
pub async fn update_preferences_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdatePreferencesRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .users
        .update_preferences
        .execute(user.user_id(), req.into_inner().preferences)
        .await
    {
        Ok(preferences) => {
            ApiResponse::success_with_message("Preferences updated successfully", preferences)
        }
        Err(UpdatePreferencesError::Validation(details)) => {
            ApiResponse::validation_error("Invalid preferences", details)
        }
        Err(UpdatePreferencesError::UserNotFound) => {
            warn!(user_id = %user.user_id(), "Preferences update for vanished account");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdatePreferencesError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id(), "Failed to update preferences: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
