use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::job::application::domain::entities::{Job, Salary};
use crate::shared::validation::FieldError;

/// Raw posting payload; required fields stay optional here so every
/// problem can be reported at once.
#[derive(Debug, Clone, Default)]
pub struct CreateJobInput {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub job_description: Option<String>,
    pub job_excerpt: Option<String>,
    pub job_tags: Vec<String>,
    pub job_type: Option<String>,
    pub job_level: Option<String>,
    pub job_geo: Option<String>,
    pub is_remote: Option<bool>,
    pub salary: Option<Salary>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub url: Option<String>,
    pub application_url: Option<String>,
    pub job_industry: Option<String>,
    pub company_size: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateJobError {
    #[error("Invalid job data")]
    Validation(Vec<FieldError>),

    #[error("Role may not publish postings")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateJobUseCase: Send + Sync {
    async fn execute(
        &self,
        owner_id: Uuid,
        owner_role: Role,
        input: CreateJobInput,
    ) -> Result<Job, CreateJobError>;
}
