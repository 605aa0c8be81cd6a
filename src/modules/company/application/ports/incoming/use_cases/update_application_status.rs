use async_trait::async_trait;
use uuid::Uuid;

use crate::job::application::domain::entities::ApplicationStatus;
use crate::shared::validation::FieldError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateApplicationStatusError {
    #[error("Invalid status")]
    Validation(Vec<FieldError>),

    #[error("Job not found or you don't have permission")]
    JobNotFound,

    #[error("Application not found")]
    ApplicationNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateApplicationStatusUseCase: Send + Sync {
    /// `status` is the raw value from the request body.
    async fn execute(
        &self,
        user_id: Uuid,
        job_id: Uuid,
        applicant_id: Uuid,
        status: Option<String>,
    ) -> Result<ApplicationStatus, UpdateApplicationStatusError>;
}
