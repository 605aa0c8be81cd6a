use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::{Role, UserProfile};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "jane@example.com")]
    #[serde(default)]
    pub email: String,

    #[schema(example = "secret123")]
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    id: Uuid,
    name: String,
    email: String,
    #[schema(value_type = String, example = "user")]
    role: Role,
    #[schema(value_type = Object)]
    profile: UserProfile,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    message: String,
    /// Bearer token for the `Authorization` header
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    token: String,
    user: LoginUserInfo,
}

/// User login
///
/// Exchanges email and password for a bearer token. Unknown email, wrong
/// password and deactivated accounts all produce the same 401.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": "Invalid credentials",
                "code": "INVALID_CREDENTIALS"
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    info!(email = %request.email(), "Login attempt");

    match data.auth.login.execute(request).await {
        Ok(session) => {
            info!(user_id = %session.account.id, "User logged in successfully");
            let account = session.account;

            ApiResponse::ok_body(LoginResponse {
                message: "Login successful".to_string(),
                token: session.token,
                user: LoginUserInfo {
                    id: account.id,
                    name: account.name,
                    email: account.email,
                    role: account.role,
                    profile: account.profile,
                },
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid credentials")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}
