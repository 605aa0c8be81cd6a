use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ToggleFavoriteError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ToggleFavoriteUseCase: Send + Sync {
    /// Returns the favorited state after the toggle.
    async fn execute(&self, user_id: Uuid, job_id: Uuid) -> Result<bool, ToggleFavoriteError>;
}
