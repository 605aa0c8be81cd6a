use async_trait::async_trait;

use crate::auth::application::domain::entities::Account;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeactivateAccountError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeactivateAccountUseCase: Send + Sync {
    async fn execute(&self, account: &Account) -> Result<(), DeactivateAccountError>;
}
