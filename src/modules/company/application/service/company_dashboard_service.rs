use async_trait::async_trait;
use uuid::Uuid;

use crate::company::application::domain::entities::{CompanyDashboard, OwnerScope};
use crate::company::application::ports::incoming::use_cases::{
    CompanyDashboardError, CompanyDashboardUseCase, RECENT_APPLICANTS_LIMIT, TOP_JOBS_LIMIT,
};
use crate::company::application::ports::outgoing::{CompanyJobQuery, CompanyQueryError};

pub struct CompanyDashboardService<Q>
where
    Q: CompanyJobQuery,
{
    query: Q,
}

impl<Q> CompanyDashboardService<Q>
where
    Q: CompanyJobQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn query_failed(e: CompanyQueryError) -> CompanyDashboardError {
    CompanyDashboardError::QueryFailed(e.to_string())
}

#[async_trait]
impl<Q> CompanyDashboardUseCase for CompanyDashboardService<Q>
where
    Q: CompanyJobQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
    ) -> Result<CompanyDashboard, CompanyDashboardError> {
        let scope = OwnerScope::Owner(user_id);

        let (stats, top_jobs, recent_applications) = futures::try_join!(
            self.query.stats(scope),
            self.query.top_jobs(scope, TOP_JOBS_LIMIT),
            self.query.recent_applicants(scope, RECENT_APPLICANTS_LIMIT),
        )
        .map_err(query_failed)?;

        Ok(CompanyDashboard {
            stats,
            top_jobs,
            recent_applications,
        })
    }
}
