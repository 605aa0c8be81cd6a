use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::Account;
use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};
use crate::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticateError {
    #[error("Invalid token: {0}")]
    InvalidToken(TokenError),

    #[error("User not found")]
    UserNotFound,

    #[error("Account is deactivated")]
    AccountInactive,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Resolves a bearer token to the live account it belongs to.
#[async_trait]
pub trait IAuthenticateUserUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<Account, AuthenticateError>;
}

pub struct AuthenticateUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> AuthenticateUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            query,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> IAuthenticateUserUseCase for AuthenticateUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<Account, AuthenticateError> {
        let claims = self
            .token_provider
            .verify_token(token)
            .map_err(AuthenticateError::InvalidToken)?;

        let user = self
            .query
            .find_by_id(claims.sub)
            .await
            .map_err(|e| AuthenticateError::QueryError(e.to_string()))?
            .ok_or(AuthenticateError::UserNotFound)?;

        if !user.is_active {
            return Err(AuthenticateError::AccountInactive);
        }

        Ok(user.into_account())
    }
}
