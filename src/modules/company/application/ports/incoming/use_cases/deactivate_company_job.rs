use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeactivateCompanyJobError {
    #[error("Job not found or you don't have permission to delete it")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeactivateCompanyJobUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        role: Role,
        job_id: Uuid,
    ) -> Result<(), DeactivateCompanyJobError>;
}
