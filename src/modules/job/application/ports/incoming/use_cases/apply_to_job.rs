use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct ApplyToJobInput {
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApplyToJobError {
    #[error("Job not found")]
    JobNotFound,

    #[error("You have already applied to this job")]
    AlreadyApplied,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ApplyToJobUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        job_id: Uuid,
        input: ApplyToJobInput,
    ) -> Result<(), ApplyToJobError>;
}
