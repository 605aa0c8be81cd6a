use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use super::register_user::MIN_PASSWORD_LENGTH;
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository};
use crate::shared::validation::FieldError;

#[derive(Debug, Clone, Default)]
pub struct ChangePasswordInput {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Invalid password data")]
    Validation(Vec<FieldError>),

    #[error("Current password is incorrect")]
    IncorrectPassword,

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IChangePasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        input: ChangePasswordInput,
    ) -> Result<(), ChangePasswordError>;
}

pub struct ChangePasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> ChangePasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IChangePasswordUseCase for ChangePasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        input: ChangePasswordInput,
    ) -> Result<(), ChangePasswordError> {
        let current_password = input.current_password.unwrap_or_default();
        let new_password = input.new_password.unwrap_or_default();

        let mut errors = Vec::new();
        if current_password.is_empty() {
            errors.push(FieldError::new(
                "currentPassword",
                "Current password is required",
            ));
        }
        if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push(FieldError::new(
                "newPassword",
                "New password must be at least 6 characters",
            ));
        }
        if !errors.is_empty() {
            return Err(ChangePasswordError::Validation(errors));
        }

        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))?
            .ok_or(ChangePasswordError::UserNotFound)?;

        let matches = self
            .password_hasher
            .verify_password(&current_password, &user.password_hash)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;
        if !matches {
            return Err(ChangePasswordError::IncorrectPassword);
        }

        let new_hash = self
            .password_hasher
            .hash_password(&new_password)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .update_password(user_id, new_hash)
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))
    }
}
