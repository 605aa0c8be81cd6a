use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::change_password::{
    ChangePasswordError, ChangePasswordInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/auth/change-password",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "Missing or weak password", body = ErrorResponse),
        (status = 401, description = "Current password is incorrect", body = ErrorResponse),
    )
)]
#[post("/api/auth/change-password")]
pub async fn change_password_handler(
    user: AuthenticatedUser,
    req: web::Json<ChangePasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let input = ChangePasswordInput {
        current_password: dto.current_password,
        new_password: dto.new_password,
    };

    match data.auth.change_password.execute(user.user_id(), input).await {
        Ok(()) => {
            info!(user_id = %user.user_id(), "Password changed");
            ApiResponse::message("Password changed successfully")
        }
        Err(ChangePasswordError::Validation(details)) => {
            ApiResponse::validation_error("Validation failed", details)
        }
        Err(ChangePasswordError::IncorrectPassword) => {
            warn!(user_id = %user.user_id(), "Password change with wrong current password");
            ApiResponse::unauthorized("INCORRECT_PASSWORD", "Current password is incorrect")
        }
        Err(ChangePasswordError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(ChangePasswordError::HashingFailed(e)) | Err(ChangePasswordError::RepositoryError(e)) => {
            error!(user_id = %user.user_id(), error = %e, "Password change failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::auth::application::use_cases::change_password::IChangePasswordUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{sample_account, StubAuthenticateUseCase};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;
    use uuid::Uuid;

    struct CheckCurrent;

    #[async_trait]
    impl IChangePasswordUseCase for CheckCurrent {
        async fn execute(
            &self,
            _user_id: Uuid,
            input: ChangePasswordInput,
        ) -> Result<(), ChangePasswordError> {
            match input.current_password.as_deref() {
                Some("secret1") => Ok(()),
                _ => Err(ChangePasswordError::IncorrectPassword),
            }
        }
    }

    async fn call(body: serde_json::Value) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_authenticate(Arc::new(StubAuthenticateUseCase::accepting(
                "tok",
                sample_account(Role::User),
            )))
            .with_change_password(Arc::new(CheckCurrent))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(change_password_handler)).await;
        let req = test::TestRequest::post()
            .uri("/api/auth/change-password")
            .insert_header(("Authorization", "Bearer tok"))
            .set_json(body)
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn changes_password() {
        let resp = call(serde_json::json!({
            "currentPassword": "secret1",
            "newPassword": "secret2"
        }))
        .await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Password changed successfully");
    }

    #[actix_web::test]
    async fn wrong_current_password_is_401() {
        let resp = call(serde_json::json!({
            "currentPassword": "nope",
            "newPassword": "secret2"
        }))
        .await;

        assert_eq!(resp.status(), 401);
    }
}
