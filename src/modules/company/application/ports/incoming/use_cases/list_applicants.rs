use async_trait::async_trait;
use uuid::Uuid;

use crate::company::application::domain::entities::ApplicantEntry;
use crate::job::application::domain::entities::ApplicationStatus;
use crate::shared::pagination::{PageRequest, PageResult};

pub const DEFAULT_APPLICANT_PAGE_SIZE: u64 = 20;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListApplicantsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListApplicantsUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        status: Option<ApplicationStatus>,
        page: PageRequest,
    ) -> Result<PageResult<ApplicantEntry>, ListApplicantsError>;
}
