use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use futures::future::join_all;
use rand::seq::SliceRandom;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::job::application::domain::entities::{ExternalJob, JobFilters, RandomJob};
use crate::job::application::ports::incoming::use_cases::{
    ListRandomJobsError, ListRandomJobsUseCase, RandomJobs, MAX_RANDOM_COUNT,
};
use crate::job::application::ports::outgoing::{ExternalJobsGateway, JobQuery};
use crate::shared::pagination::PageRequest;

pub const DEFAULT_TECH_CATALOGUE: [&str; 6] =
    ["javascript", "python", "react", "node", "java", "typescript"];

#[derive(Debug, Clone)]
pub struct RandomJobsSettings {
    /// Keywords sampled for each request.
    pub catalogue: Vec<String>,
    pub techs_per_request: usize,
    /// Result-count hint sent to the gateway for each keyword.
    pub per_tech_count: u32,
    pub per_call_timeout: Duration,
}

impl Default for RandomJobsSettings {
    fn default() -> Self {
        Self {
            catalogue: DEFAULT_TECH_CATALOGUE.iter().map(|t| t.to_string()).collect(),
            techs_per_request: 3,
            per_tech_count: 5,
            per_call_timeout: Duration::from_secs(5),
        }
    }
}

/// Gathers postings for a few random keywords from the gateway, each call
/// under its own timeout, then backfills any shortfall from local live
/// postings.
pub struct ListRandomJobsService<Q>
where
    Q: JobQuery,
{
    gateway: Arc<dyn ExternalJobsGateway>,
    query: Q,
    settings: RandomJobsSettings,
}

impl<Q> ListRandomJobsService<Q>
where
    Q: JobQuery,
{
    pub fn new(gateway: Arc<dyn ExternalJobsGateway>, query: Q, settings: RandomJobsSettings) -> Self {
        Self {
            gateway,
            query,
            settings,
        }
    }

    fn pick_technologies(&self) -> Vec<String> {
        let take = self
            .settings
            .techs_per_request
            .min(self.settings.catalogue.len());
        let mut rng = rand::thread_rng();
        self.settings
            .catalogue
            .choose_multiple(&mut rng, take)
            .cloned()
            .collect()
    }

    async fn fetch_for(&self, technology: &str) -> Vec<ExternalJob> {
        let call = self
            .gateway
            .fetch_jobs(technology, self.settings.per_tech_count);

        match timeout(self.settings.per_call_timeout, call).await {
            Ok(Ok(jobs)) => jobs,
            Ok(Err(e)) => {
                warn!(technology, error = %e, "External jobs lookup failed");
                Vec::new()
            }
            Err(_) => {
                warn!(
                    technology,
                    timeout_ms = self.settings.per_call_timeout.as_millis() as u64,
                    "External jobs lookup timed out"
                );
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl<Q> ListRandomJobsUseCase for ListRandomJobsService<Q>
where
    Q: JobQuery + Send + Sync,
{
    async fn execute(&self, count: u32) -> Result<RandomJobs, ListRandomJobsError> {
        let count = count.clamp(1, MAX_RANDOM_COUNT) as usize;
        let featured_techs = self.pick_technologies();

        let batches = join_all(featured_techs.iter().map(|tech| self.fetch_for(tech))).await;
        let mut jobs: Vec<RandomJob> = batches
            .into_iter()
            .flatten()
            .map(RandomJob::External)
            .collect();
        let external = jobs.len();

        if jobs.len() < count {
            let shortfall = (count - jobs.len()) as u64;
            let local = self
                .query
                .list_live(
                    &JobFilters::default(),
                    PageRequest::new(Some(1), Some(shortfall), shortfall),
                    Utc::now(),
                )
                .await
                .map_err(|e| ListRandomJobsError::BackfillFailed(e.to_string()))?;
            jobs.extend(local.items.into_iter().map(RandomJob::Local));
        }

        {
            let mut rng = rand::thread_rng();
            jobs.shuffle(&mut rng);
        }
        jobs.truncate(count);

        info!(
            requested = count,
            external,
            returned = jobs.len(),
            "Random jobs assembled"
        );

        Ok(RandomJobs {
            jobs,
            featured_techs,
        })
    }
}
