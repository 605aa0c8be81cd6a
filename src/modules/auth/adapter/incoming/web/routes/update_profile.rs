use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::{Account, UserProfile};
use crate::auth::application::use_cases::update_profile::{UpdateProfileError, UpdateProfileInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

/// Password and role are not updatable through this endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub profile: Option<UserProfile>,
}

#[utoipa::path(
    put,
    path = "/api/auth/profile",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 400, description = "Invalid profile data", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
    )
)]
#[put("/api/auth/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let input = UpdateProfileInput {
        name: dto.name,
        email: dto.email,
        profile: dto.profile,
    };

    match data.auth.update_profile.execute(user.user_id(), input).await {
        Ok(account) => {
            info!(user_id = %account.id, "Profile updated");
            ApiResponse::ok_body(UpdatedUser {
                message: "Profile updated successfully",
                user: account,
            })
        }
        Err(UpdateProfileError::Validation(details)) => {
            ApiResponse::validation_error("Validation failed", details)
        }
        Err(UpdateProfileError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email is already in use")
        }
        Err(UpdateProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateProfileError::RepositoryError(e)) => {
            error!(user_id = %user.user_id(), error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}

#[derive(serde::Serialize)]
struct UpdatedUser {
    message: &'static str,
    user: Account,
}
