use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FavoriteRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Returns whether a row was removed.
    async fn remove(&self, user_id: Uuid, job_id: Uuid) -> Result<bool, FavoriteRepositoryError>;

    /// No-op when the pair is already stored.
    async fn add(&self, user_id: Uuid, job_id: Uuid) -> Result<(), FavoriteRepositoryError>;
}
