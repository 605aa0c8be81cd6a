use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::job::application::domain::entities::{ExternalJob, JobLevel, JobSource, JobType};
use crate::job::application::ports::outgoing::{ExternalJobsError, ExternalJobsGateway};

pub const DEFAULT_JOBICY_URL: &str = "https://jobicy.com/api/v2/remote-jobs";

#[derive(Debug, Deserialize)]
struct JobicyResponse {
    #[serde(default)]
    jobs: Vec<JobicyJob>,
}

/// Raw listing. Jobicy sends some fields as either a string or an array.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobicyJob {
    id: Value,
    #[serde(default)]
    url: String,
    #[serde(default)]
    job_title: String,
    #[serde(default)]
    company_name: String,
    company_logo: Option<String>,
    job_excerpt: Option<String>,
    job_description: Option<String>,
    #[serde(default)]
    job_tags: Value,
    #[serde(default)]
    job_type: Value,
    job_level: Option<String>,
    job_geo: Option<String>,
    #[serde(default)]
    job_industry: Value,
}

fn strings(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
    .into_iter()
    .map(|s| s.trim().to_string())
    .filter(|s| !s.is_empty())
    .collect()
}

fn parse_level(raw: Option<&str>) -> JobLevel {
    match raw.map(|l| l.trim().to_ascii_lowercase()).as_deref() {
        Some("midweight") | Some("middle") => JobLevel::Mid,
        Some(other) => other.parse().unwrap_or(JobLevel::Mid),
        None => JobLevel::Mid,
    }
}

fn normalize(job: JobicyJob, technology: &str) -> ExternalJob {
    let external_id = match &job.id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let mut job_tags = strings(&job.job_tags);
    if job_tags.is_empty() {
        job_tags.push(technology.to_string());
    }

    let job_type = strings(&job.job_type)
        .first()
        .and_then(|t| t.parse::<JobType>().ok())
        .unwrap_or_default();

    ExternalJob {
        external_id,
        job_title: job.job_title,
        company_name: job.company_name,
        company_logo: job.company_logo,
        job_excerpt: job.job_excerpt,
        job_description: job.job_description,
        job_tags,
        job_type,
        job_level: parse_level(job.job_level.as_deref()),
        job_geo: job
            .job_geo
            .filter(|g| !g.trim().is_empty())
            .unwrap_or_else(|| "Remote".to_string()),
        url: job.url,
        job_industry: strings(&job.job_industry).into_iter().next(),
        source: JobSource::Jobicy,
        is_external: true,
        source_tech: technology.to_string(),
    }
}

/// Decodes a Jobicy response body into normalized postings.
pub fn parse_jobicy_body(body: &[u8], technology: &str) -> Result<Vec<ExternalJob>, ExternalJobsError> {
    let response: JobicyResponse =
        serde_json::from_slice(body).map_err(|e| ExternalJobsError::Decode(e.to_string()))?;

    Ok(response
        .jobs
        .into_iter()
        .map(|job| normalize(job, technology))
        .collect())
}

#[derive(Clone)]
pub struct JobicyGateway {
    client: Client,
    base_url: String,
}

impl JobicyGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ExternalJobsError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExternalJobsError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn request_url(&self, technology: &str, count: u32) -> Result<Url, ExternalJobsError> {
        Url::parse_with_params(
            &self.base_url,
            &[("count", count.to_string()), ("tag", technology.to_string())],
        )
        .map_err(|e| ExternalJobsError::Request(e.to_string()))
    }
}

#[async_trait]
impl ExternalJobsGateway for JobicyGateway {
    async fn fetch_jobs(
        &self,
        technology: &str,
        count: u32,
    ) -> Result<Vec<ExternalJob>, ExternalJobsError> {
        let url = self.request_url(technology, count)?;
        debug!(%url, "Fetching external jobs");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ExternalJobsError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExternalJobsError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ExternalJobsError::Request(e.to_string()))?;

        parse_jobicy_body(&body, technology)
    }
}
