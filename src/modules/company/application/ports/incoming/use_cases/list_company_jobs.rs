use async_trait::async_trait;
use uuid::Uuid;

use crate::company::application::domain::entities::{CompanyJob, CompanyStats};
use crate::company::application::ports::outgoing::CompanyQueryError;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyJobsPage {
    pub jobs: PageResult<CompanyJob>,
    pub stats: CompanyStats,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCompanyJobsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<CompanyQueryError> for ListCompanyJobsError {
    fn from(err: CompanyQueryError) -> Self {
        match err {
            CompanyQueryError::DatabaseError(msg) | CompanyQueryError::SerializationError(msg) => {
                ListCompanyJobsError::QueryFailed(msg)
            }
        }
    }
}

#[async_trait]
pub trait ListCompanyJobsUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<CompanyJobsPage, ListCompanyJobsError>;
}
