use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::company::application::domain::entities::OwnerScope;
use crate::company::application::ports::incoming::use_cases::{
    DeactivateCompanyJobError, DeactivateCompanyJobUseCase,
};
use crate::company::application::ports::outgoing::{CompanyJobRepository, CompanyRepositoryError};

pub struct DeactivateCompanyJobService<R>
where
    R: CompanyJobRepository,
{
    repository: R,
}

impl<R> DeactivateCompanyJobService<R>
where
    R: CompanyJobRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeactivateCompanyJobUseCase for DeactivateCompanyJobService<R>
where
    R: CompanyJobRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        role: Role,
        job_id: Uuid,
    ) -> Result<(), DeactivateCompanyJobError> {
        self.repository
            .deactivate_job(OwnerScope::for_deactivation(user_id, role), job_id)
            .await
            .map_err(|e| match e {
                CompanyRepositoryError::JobNotFound => DeactivateCompanyJobError::NotFound,
                other => DeactivateCompanyJobError::RepositoryError(other.to_string()),
            })?;

        info!(job_id = %job_id, user_id = %user_id, "Job deactivated");
        Ok(())
    }
}
