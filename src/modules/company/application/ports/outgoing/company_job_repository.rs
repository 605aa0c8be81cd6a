use async_trait::async_trait;
use uuid::Uuid;

use crate::company::application::domain::entities::{JobPatch, OwnerScope};
use crate::job::application::domain::entities::{ApplicationStatus, Job};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CompanyRepositoryError {
    /// Missing, or outside the caller's scope.
    #[error("Job not found")]
    JobNotFound,

    #[error("Application not found")]
    ApplicationNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait CompanyJobRepository: Send + Sync {
    async fn update_job(
        &self,
        scope: OwnerScope,
        job_id: Uuid,
        patch: JobPatch,
    ) -> Result<Job, CompanyRepositoryError>;

    /// Soft delete: clears `is_active`, keeps the row and its applications.
    async fn deactivate_job(&self, scope: OwnerScope, job_id: Uuid)
        -> Result<(), CompanyRepositoryError>;

    async fn update_application_status(
        &self,
        scope: OwnerScope,
        job_id: Uuid,
        user_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<(), CompanyRepositoryError>;
}
