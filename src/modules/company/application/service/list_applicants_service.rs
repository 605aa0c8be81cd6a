use async_trait::async_trait;
use uuid::Uuid;

use crate::company::application::domain::entities::{ApplicantEntry, OwnerScope};
use crate::company::application::ports::incoming::use_cases::{
    ListApplicantsError, ListApplicantsUseCase,
};
use crate::company::application::ports::outgoing::CompanyJobQuery;
use crate::job::application::domain::entities::ApplicationStatus;
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListApplicantsService<Q>
where
    Q: CompanyJobQuery,
{
    query: Q,
}

impl<Q> ListApplicantsService<Q>
where
    Q: CompanyJobQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListApplicantsUseCase for ListApplicantsService<Q>
where
    Q: CompanyJobQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        status: Option<ApplicationStatus>,
        page: PageRequest,
    ) -> Result<PageResult<ApplicantEntry>, ListApplicantsError> {
        self.query
            .list_applicants(OwnerScope::Owner(user_id), status, page)
            .await
            .map_err(|e| ListApplicantsError::QueryFailed(e.to_string()))
    }
}
