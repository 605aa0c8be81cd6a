use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use uuid::Uuid;

use crate::auth::application::domain::entities::{authorize_roles, Account, Role};
use crate::auth::application::use_cases::authenticate_user::AuthenticateError;
use crate::{shared::api::ApiResponse, AppState};

/// A request carrying a valid bearer token for a live, active account.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub account: Account,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> Uuid {
        self.account.id
    }

    pub fn role(&self) -> Role {
        self.account.role
    }
}

/// Like [`AuthenticatedUser`] but never rejects: any failure yields `None`.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<Account>);

/// An authenticated company or admin account.
#[derive(Debug, Clone)]
pub struct PostingManager {
    pub account: Account,
}

impl PostingManager {
    pub fn user_id(&self) -> Uuid {
        self.account.id
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

async fn authenticate(req: HttpRequest) -> Result<Account, HttpResponse> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| {
            tracing::error!("AppState missing from request");
            ApiResponse::internal_error()
        })?;

    let token = extract_token_from_header(&req).ok_or_else(|| {
        ApiResponse::unauthorized("MISSING_AUTH_HEADER", "Access denied. No token provided.")
    })?;

    match state.auth.authenticate.execute(&token).await {
        Ok(account) => Ok(account),
        Err(AuthenticateError::InvalidToken(e)) => {
            tracing::debug!(error = %e, "Rejected bearer token");
            Err(ApiResponse::unauthorized("INVALID_TOKEN", "Invalid token."))
        }
        Err(AuthenticateError::UserNotFound) | Err(AuthenticateError::AccountInactive) => Err(
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid token or user not active."),
        ),
        Err(AuthenticateError::QueryError(msg)) => {
            tracing::error!("Failed to load user for token: {}", msg);
            Err(ApiResponse::internal_error())
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            authenticate(req)
                .await
                .map(|account| AuthenticatedUser { account })
                .map_err(create_api_error)
        })
    }
}

impl FromRequest for OptionalUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move { Ok(OptionalUser(authenticate(req).await.ok())) })
    }
}

impl FromRequest for PostingManager {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let account = authenticate(req).await.map_err(create_api_error)?;

            if !authorize_roles(account.role, &[Role::Company, Role::Admin]) {
                return Err(create_api_error(ApiResponse::forbidden(
                    "FORBIDDEN",
                    &format!(
                        "User role {} is not authorized to access this resource",
                        account.role
                    ),
                )));
            }

            Ok(PostingManager { account })
        })
    }
}
