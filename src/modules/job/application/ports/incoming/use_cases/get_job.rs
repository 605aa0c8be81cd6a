use async_trait::async_trait;
use uuid::Uuid;

use crate::job::application::domain::entities::JobDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetJobError {
    #[error("Job not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetJobUseCase: Send + Sync {
    /// Every successful call counts one view.
    async fn execute(&self, job_id: Uuid) -> Result<JobDetail, GetJobError>;
}
