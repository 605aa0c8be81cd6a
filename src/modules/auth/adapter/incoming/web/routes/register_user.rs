use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::{Account, Role};
use crate::auth::application::use_cases::register_user::{RegisterUserError, RegisterUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{http::StatusCode, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// Registration payload. Every field is optional at the JSON level so that
/// missing values are reported per field instead of as a parse error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[schema(example = "secret123")]
    pub password: Option<String>,
    /// `user` (default) or `company`.
    #[schema(example = "company")]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[schema(value_type = String, example = "user")]
    pub role: Role,
}

impl From<&Account> for SessionUser {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub token: String,
    pub user: SessionUser,
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Invalid registration data", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let input = RegisterUserInput {
        name: dto.name,
        email: dto.email,
        password: dto.password,
        role: dto.role,
    };

    match data.auth.register.execute(input).await {
        Ok(session) => {
            info!(
                user_id = %session.account.id,
                role = %session.account.role,
                "User registered"
            );
            ApiResponse::body(
                StatusCode::CREATED,
                RegisterResponse {
                    message: "User registered successfully".to_string(),
                    token: session.token,
                    user: SessionUser::from(&session.account),
                },
            )
        }
        Err(RegisterUserError::Validation(details)) => {
            ApiResponse::validation_error("Validation failed", details)
        }
        Err(RegisterUserError::EmailAlreadyExists) => {
            warn!("Registration rejected: email already registered");
            ApiResponse::conflict(
                "EMAIL_ALREADY_EXISTS",
                "User already exists with this email",
            )
        }
        Err(RegisterUserError::HashingFailed(e))
        | Err(RegisterUserError::TokenGenerationFailed(e))
        | Err(RegisterUserError::RepositoryError(e)) => {
            error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
