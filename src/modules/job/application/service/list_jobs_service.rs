use async_trait::async_trait;
use chrono::Utc;

use crate::job::application::domain::entities::{Job, JobFilters};
use crate::job::application::ports::incoming::use_cases::{ListJobsError, ListJobsUseCase};
use crate::job::application::ports::outgoing::JobQuery;
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListJobsService<Q>
where
    Q: JobQuery,
{
    query: Q,
}

impl<Q> ListJobsService<Q>
where
    Q: JobQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListJobsUseCase for ListJobsService<Q>
where
    Q: JobQuery + Send + Sync,
{
    async fn execute(
        &self,
        filters: JobFilters,
        page: PageRequest,
    ) -> Result<PageResult<Job>, ListJobsError> {
        self.query
            .list_live(&filters, page, Utc::now())
            .await
            .map_err(ListJobsError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::application::domain::entities::JobLevel;
    use crate::tests::support::fixtures::sample_job;
    use crate::tests::support::in_memory::InMemoryStore;
    use chrono::Duration;

    #[tokio::test]
    async fn only_live_postings_are_listed() {
        let store = InMemoryStore::default();
        let live = sample_job(None);
        let mut expired = sample_job(None);
        expired.expires_at = Utc::now() - Duration::hours(1);
        let mut inactive = sample_job(None);
        inactive.is_active = false;
        store.insert_job(live.clone());
        store.insert_job(expired);
        store.insert_job(inactive);

        let page = ListJobsService::new(store)
            .execute(JobFilters::default(), PageRequest::default())
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, live.id);
    }

    #[tokio::test]
    async fn pages_are_disjoint_and_newest_first() {
        let store = InMemoryStore::default();
        for minutes in 0..5 {
            let mut job = sample_job(None);
            job.created_at = Utc::now() - Duration::minutes(minutes);
            store.insert_job(job);
        }
        let service = ListJobsService::new(store);

        let first = service
            .execute(JobFilters::default(), PageRequest::new(Some(1), Some(2), 10))
            .await
            .unwrap();
        let second = service
            .execute(JobFilters::default(), PageRequest::new(Some(2), Some(2), 10))
            .await
            .unwrap();

        assert_eq!(first.total, 5);
        assert_eq!(first.total_pages(), 3);
        assert!(first.items[0].created_at > first.items[1].created_at);
        assert!(second
            .items
            .iter()
            .all(|job| first.items.iter().all(|other| other.id != job.id)));
    }

    #[tokio::test]
    async fn filters_combine() {
        let store = InMemoryStore::default();
        let mut senior_rust = sample_job(None);
        senior_rust.job_level = JobLevel::Senior;
        senior_rust.job_tags = vec!["Rust".into(), "Tokio".into()];
        let mut mid_rust = sample_job(None);
        mid_rust.job_tags = vec!["rust".into()];
        let mut senior_go = sample_job(None);
        senior_go.job_level = JobLevel::Senior;
        senior_go.job_tags = vec!["go".into()];
        store.insert_job(senior_rust.clone());
        store.insert_job(mid_rust);
        store.insert_job(senior_go);

        let page = ListJobsService::new(store)
            .execute(
                JobFilters {
                    technology: Some("RUST".into()),
                    level: Some(JobLevel::Senior),
                    ..Default::default()
                },
                PageRequest::default(),
            )
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, senior_rust.id);
    }
}
