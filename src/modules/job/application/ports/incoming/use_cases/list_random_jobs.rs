use async_trait::async_trait;

use crate::job::application::domain::entities::RandomJob;

pub const DEFAULT_RANDOM_COUNT: u32 = 25;
pub const MAX_RANDOM_COUNT: u32 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct RandomJobs {
    pub jobs: Vec<RandomJob>,
    pub featured_techs: Vec<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListRandomJobsError {
    /// Only the local backfill can fail the request; gateway errors are absorbed.
    #[error("Backfill query failed: {0}")]
    BackfillFailed(String),
}

#[async_trait]
pub trait ListRandomJobsUseCase: Send + Sync {
    async fn execute(&self, count: u32) -> Result<RandomJobs, ListRandomJobsError>;
}
