use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::job::application::domain::entities::NewApplication;
use crate::job::application::ports::incoming::use_cases::{
    ApplyToJobError, ApplyToJobInput, ApplyToJobUseCase,
};
use crate::job::application::ports::outgoing::{
    ApplicationRepository, ApplicationRepositoryError, JobQuery,
};
use crate::shared::validation::non_blank;

pub struct ApplyToJobService<Q, A>
where
    Q: JobQuery,
    A: ApplicationRepository,
{
    query: Q,
    applications: A,
}

impl<Q, A> ApplyToJobService<Q, A>
where
    Q: JobQuery,
    A: ApplicationRepository,
{
    pub fn new(query: Q, applications: A) -> Self {
        Self {
            query,
            applications,
        }
    }
}

#[async_trait]
impl<Q, A> ApplyToJobUseCase for ApplyToJobService<Q, A>
where
    Q: JobQuery + Send + Sync,
    A: ApplicationRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        job_id: Uuid,
        input: ApplyToJobInput,
    ) -> Result<(), ApplyToJobError> {
        let exists = self
            .query
            .exists(job_id)
            .await
            .map_err(|e| ApplyToJobError::RepositoryError(e.to_string()))?;
        if !exists {
            return Err(ApplyToJobError::JobNotFound);
        }

        let already = self
            .applications
            .has_applied(job_id, user_id)
            .await
            .map_err(|e| ApplyToJobError::RepositoryError(e.to_string()))?;
        if already {
            return Err(ApplyToJobError::AlreadyApplied);
        }

        self.applications
            .create(NewApplication {
                job_id,
                user_id,
                resume: non_blank(input.resume.as_deref()),
                cover_letter: non_blank(input.cover_letter.as_deref()),
            })
            .await
            .map_err(|e| match e {
                ApplicationRepositoryError::AlreadyApplied => ApplyToJobError::AlreadyApplied,
                other => ApplyToJobError::RepositoryError(other.to_string()),
            })?;

        info!(job_id = %job_id, user_id = %user_id, "Application submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::application::domain::entities::ApplicationStatus;
    use crate::tests::support::fixtures::sample_job;
    use crate::tests::support::in_memory::InMemoryStore;

    #[tokio::test]
    async fn first_application_is_stored_as_applied() {
        let store = InMemoryStore::default();
        let job = sample_job(None);
        store.insert_job(job.clone());
        let user = Uuid::new_v4();

        ApplyToJobService::new(store.clone(), store.clone())
            .execute(
                user,
                job.id,
                ApplyToJobInput {
                    resume: Some("https://cv.example.com/me.pdf".into()),
                    cover_letter: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(
            store.application_status(job.id, user),
            Some(ApplicationStatus::Applied)
        );
    }

    #[tokio::test]
    async fn second_application_is_rejected_and_leaves_one_row() {
        let store = InMemoryStore::default();
        let job = sample_job(None);
        store.insert_job(job.clone());
        let user = Uuid::new_v4();
        let service = ApplyToJobService::new(store.clone(), store.clone());

        service
            .execute(user, job.id, ApplyToJobInput::default())
            .await
            .unwrap();
        let second = service
            .execute(user, job.id, ApplyToJobInput::default())
            .await;

        assert!(matches!(second, Err(ApplyToJobError::AlreadyApplied)));
        assert_eq!(store.application_count(job.id), 1);
    }

    #[tokio::test]
    async fn unknown_job_is_not_found() {
        let store = InMemoryStore::default();

        let result = ApplyToJobService::new(store.clone(), store)
            .execute(Uuid::new_v4(), Uuid::new_v4(), ApplyToJobInput::default())
            .await;

        assert!(matches!(result, Err(ApplyToJobError::JobNotFound)));
    }
}
