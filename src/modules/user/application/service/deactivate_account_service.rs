use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::auth::application::domain::entities::Account;
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};
use crate::user::application::domain::entities::deactivated_email;
use crate::user::application::ports::incoming::use_cases::{
    DeactivateAccountError, DeactivateAccountUseCase,
};

pub struct DeactivateAccountService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> DeactivateAccountService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeactivateAccountUseCase for DeactivateAccountService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, account: &Account) -> Result<(), DeactivateAccountError> {
        let replacement = deactivated_email(&account.email, Utc::now());

        self.repository
            .deactivate(account.id, replacement)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeactivateAccountError::UserNotFound,
                other => DeactivateAccountError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %account.id, "Account deactivated");
        Ok(())
    }
}
