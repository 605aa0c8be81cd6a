use async_trait::async_trait;

use crate::company::application::domain::entities::{
    ApplicantEntry, CompanyJob, CompanyStats, OwnerScope, RecentApplicant, TopJob,
};
use crate::job::application::domain::entities::ApplicationStatus;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CompanyQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupted row: {0}")]
    SerializationError(String),
}

/// Read side of the company console. Every method is limited to the
/// postings in `scope`.
#[async_trait]
pub trait CompanyJobQuery: Send + Sync {
    /// Postings newest first, each with its applications.
    async fn list_owned(
        &self,
        scope: OwnerScope,
        page: PageRequest,
    ) -> Result<PageResult<CompanyJob>, CompanyQueryError>;

    async fn stats(&self, scope: OwnerScope) -> Result<CompanyStats, CompanyQueryError>;

    /// Applications across postings, most recent first.
    async fn list_applicants(
        &self,
        scope: OwnerScope,
        status: Option<ApplicationStatus>,
        page: PageRequest,
    ) -> Result<PageResult<ApplicantEntry>, CompanyQueryError>;

    /// Most viewed postings.
    async fn top_jobs(&self, scope: OwnerScope, limit: u64)
        -> Result<Vec<TopJob>, CompanyQueryError>;

    async fn recent_applicants(
        &self,
        scope: OwnerScope,
        limit: u64,
    ) -> Result<Vec<RecentApplicant>, CompanyQueryError>;
}
