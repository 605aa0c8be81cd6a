use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::job::application::domain::entities::{Job, JobDetail, JobFilters};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum JobQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupted job row: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait JobQuery: Send + Sync {
    /// Live postings matching `filters`, newest first.
    async fn list_live(
        &self,
        filters: &JobFilters,
        page: PageRequest,
        now: DateTime<Utc>,
    ) -> Result<PageResult<Job>, JobQueryError>;

    /// Any posting, live or not, with its owner resolved.
    async fn find_detail(&self, job_id: Uuid) -> Result<Option<JobDetail>, JobQueryError>;

    async fn exists(&self, job_id: Uuid) -> Result<bool, JobQueryError>;
}
