use async_trait::async_trait;
use uuid::Uuid;

use crate::company::application::domain::entities::OwnerScope;
use crate::company::application::ports::incoming::use_cases::{
    CompanyJobsPage, ListCompanyJobsError, ListCompanyJobsUseCase,
};
use crate::company::application::ports::outgoing::CompanyJobQuery;
use crate::shared::pagination::PageRequest;

pub struct ListCompanyJobsService<Q>
where
    Q: CompanyJobQuery,
{
    query: Q,
}

impl<Q> ListCompanyJobsService<Q>
where
    Q: CompanyJobQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListCompanyJobsUseCase for ListCompanyJobsService<Q>
where
    Q: CompanyJobQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<CompanyJobsPage, ListCompanyJobsError> {
        let scope = OwnerScope::Owner(user_id);

        let jobs = self.query.list_owned(scope, page).await?;
        let stats = self.query.stats(scope).await?;

        Ok(CompanyJobsPage { jobs, stats })
    }
}
