use async_trait::async_trait;
use uuid::Uuid;

use crate::company::application::domain::entities::CompanyDashboard;

pub const TOP_JOBS_LIMIT: u64 = 5;
pub const RECENT_APPLICANTS_LIMIT: u64 = 10;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CompanyDashboardError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait CompanyDashboardUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid)
        -> Result<CompanyDashboard, CompanyDashboardError>;
}
