use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::job::application::domain::entities::JobDetail;
use crate::job::application::ports::incoming::use_cases::{GetJobError, GetJobUseCase};
use crate::job::application::ports::outgoing::{JobQuery, JobRepository, JobRepositoryError};

pub struct GetJobService<Q, R>
where
    Q: JobQuery,
    R: JobRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> GetJobService<Q, R>
where
    Q: JobQuery,
    R: JobRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> GetJobUseCase for GetJobService<Q, R>
where
    Q: JobQuery + Send + Sync,
    R: JobRepository + Send + Sync,
{
    async fn execute(&self, job_id: Uuid) -> Result<JobDetail, GetJobError> {
        let detail = self
            .query
            .find_detail(job_id)
            .await
            .map_err(|e| GetJobError::QueryFailed(e.to_string()))?
            .ok_or(GetJobError::NotFound)?;

        // The returned snapshot is the one read before this view was counted.
        match self.repository.increment_views(job_id).await {
            Ok(()) => {}
            Err(JobRepositoryError::NotFound) => return Err(GetJobError::NotFound),
            Err(e) => return Err(GetJobError::QueryFailed(e.to_string())),
        }
        debug!(job_id = %job_id, "View counted");

        Ok(detail)
    }
}
