use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::company::application::domain::entities::OwnerScope;
use crate::company::application::ports::incoming::use_cases::{
    UpdateApplicationStatusError, UpdateApplicationStatusUseCase,
};
use crate::company::application::ports::outgoing::{CompanyJobRepository, CompanyRepositoryError};
use crate::job::application::domain::entities::ApplicationStatus;
use crate::shared::validation::FieldError;

pub struct UpdateApplicationStatusService<R>
where
    R: CompanyJobRepository,
{
    repository: R,
}

impl<R> UpdateApplicationStatusService<R>
where
    R: CompanyJobRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateApplicationStatusUseCase for UpdateApplicationStatusService<R>
where
    R: CompanyJobRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        job_id: Uuid,
        applicant_id: Uuid,
        status: Option<String>,
    ) -> Result<ApplicationStatus, UpdateApplicationStatusError> {
        let status = status
            .as_deref()
            .and_then(|s| s.parse::<ApplicationStatus>().ok())
            .ok_or_else(|| {
                UpdateApplicationStatusError::Validation(vec![FieldError::new(
                    "status",
                    "Status must be one of applied, viewed, interview, rejected, accepted",
                )])
            })?;

        self.repository
            .update_application_status(
                OwnerScope::Owner(user_id),
                job_id,
                applicant_id,
                status,
            )
            .await
            .map_err(|e| match e {
                CompanyRepositoryError::JobNotFound => UpdateApplicationStatusError::JobNotFound,
                CompanyRepositoryError::ApplicationNotFound => {
                    UpdateApplicationStatusError::ApplicationNotFound
                }
                other => UpdateApplicationStatusError::RepositoryError(other.to_string()),
            })?;

        info!(
            job_id = %job_id,
            applicant_id = %applicant_id,
            status = %status,
            "Application status changed"
        );
        Ok(status)
    }
}
