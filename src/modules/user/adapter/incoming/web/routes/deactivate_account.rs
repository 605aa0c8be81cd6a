use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::DeactivateAccountError;
use crate::AppState;

/// Deactivate the caller's account
///
/// The account is kept but can no longer sign in; its email is released.
#[utoipa::path(
    delete,
    path = "/api/users/account",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Account deactivated"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/users/account")]
pub async fn deactivate_account_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.users.deactivate_account.execute(&user.account).await {
        Ok(()) => {
            info!(user_id = %user.user_id(), "User deactivated own account");
            ApiResponse::message("Account deactivated successfully")
        }
        Err(DeactivateAccountError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(DeactivateAccountError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id(), "Failed to deactivate account: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
