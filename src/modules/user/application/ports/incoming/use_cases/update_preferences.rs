use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserPreferences;
use crate::shared::validation::FieldError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePreferencesError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdatePreferencesUseCase: Send + Sync {
    /// `preferences` is the raw client object; it replaces the stored one.
    async fn execute(
        &self,
        user_id: Uuid,
        preferences: serde_json::Value,
    ) -> Result<UserPreferences, UpdatePreferencesError>;
}
