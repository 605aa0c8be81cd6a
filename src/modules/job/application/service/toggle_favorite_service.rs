use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::job::application::ports::incoming::use_cases::{
    ToggleFavoriteError, ToggleFavoriteUseCase,
};
use crate::job::application::ports::outgoing::FavoriteRepository;

/// Flips membership of a job in the user's favorites. The job itself is not
/// looked up.
pub struct ToggleFavoriteService<F>
where
    F: FavoriteRepository,
{
    favorites: F,
}

impl<F> ToggleFavoriteService<F>
where
    F: FavoriteRepository,
{
    pub fn new(favorites: F) -> Self {
        Self { favorites }
    }
}

#[async_trait]
impl<F> ToggleFavoriteUseCase for ToggleFavoriteService<F>
where
    F: FavoriteRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid, job_id: Uuid) -> Result<bool, ToggleFavoriteError> {
        let removed = self
            .favorites
            .remove(user_id, job_id)
            .await
            .map_err(|e| ToggleFavoriteError::RepositoryError(e.to_string()))?;

        if removed {
            debug!(user_id = %user_id, job_id = %job_id, "Favorite removed");
            return Ok(false);
        }

        self.favorites
            .add(user_id, job_id)
            .await
            .map_err(|e| ToggleFavoriteError::RepositoryError(e.to_string()))?;
        debug!(user_id = %user_id, job_id = %job_id, "Favorite added");

        Ok(true)
    }
}
