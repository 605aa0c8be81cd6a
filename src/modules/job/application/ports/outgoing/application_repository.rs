use async_trait::async_trait;
use uuid::Uuid;

use crate::job::application::domain::entities::NewApplication;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApplicationRepositoryError {
    #[error("User already applied to this job")]
    AlreadyApplied,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Applications are one row per (job, applicant); both the posting's
/// applicant list and the user's history read from it.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn has_applied(&self, job_id: Uuid, user_id: Uuid)
        -> Result<bool, ApplicationRepositoryError>;

    /// Fails with `AlreadyApplied` when the pair already exists, even if a
    /// concurrent request won the race after `has_applied`.
    async fn create(&self, application: NewApplication) -> Result<(), ApplicationRepositoryError>;
}
