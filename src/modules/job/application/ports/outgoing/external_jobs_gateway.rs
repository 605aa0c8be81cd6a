use async_trait::async_trait;

use crate::job::application::domain::entities::ExternalJob;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExternalJobsError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Upstream returned status {0}")]
    Status(u16),

    #[error("Undecodable response: {0}")]
    Decode(String),
}

/// Outbound listing API. Callers treat every error as non-fatal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExternalJobsGateway: Send + Sync {
    async fn fetch_jobs(
        &self,
        technology: &str,
        count: u32,
    ) -> Result<Vec<ExternalJob>, ExternalJobsError>;
}
