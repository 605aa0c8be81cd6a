use async_trait::async_trait;

use crate::job::application::domain::entities::{Job, JobFilters};
use crate::job::application::ports::outgoing::JobQueryError;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListJobsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<JobQueryError> for ListJobsError {
    fn from(err: JobQueryError) -> Self {
        match err {
            JobQueryError::DatabaseError(msg) | JobQueryError::SerializationError(msg) => {
                ListJobsError::QueryFailed(msg)
            }
        }
    }
}

#[async_trait]
pub trait ListJobsUseCase: Send + Sync {
    async fn execute(
        &self,
        filters: JobFilters,
        page: PageRequest,
    ) -> Result<PageResult<Job>, ListJobsError>;
}
