use async_trait::async_trait;
use uuid::Uuid;

use crate::job::application::domain::entities::{Job, NewJob};

#[derive(Debug, Clone, thiserror::Error)]
pub enum JobRepositoryError {
    #[error("Job not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: NewJob) -> Result<Job, JobRepositoryError>;

    /// Atomic `views = views + 1`.
    async fn increment_views(&self, job_id: Uuid) -> Result<(), JobRepositoryError>;
}
