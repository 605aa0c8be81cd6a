use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserPreferences;
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};
use crate::user::application::ports::incoming::use_cases::{
    UpdatePreferencesError, UpdatePreferencesUseCase,
};

pub struct UpdatePreferencesService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> UpdatePreferencesService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdatePreferencesUseCase for UpdatePreferencesService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        preferences: serde_json::Value,
    ) -> Result<UserPreferences, UpdatePreferencesError> {
        let preferences =
            UserPreferences::from_json(&preferences).map_err(UpdatePreferencesError::Validation)?;

        let stored = self
            .repository
            .update_preferences(user_id, preferences)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdatePreferencesError::UserNotFound,
                other => UpdatePreferencesError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user_id, "Preferences updated");
        Ok(stored)
    }
}
