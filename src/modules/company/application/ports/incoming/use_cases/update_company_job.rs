use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::job::application::domain::entities::{Job, Salary};
use crate::shared::validation::FieldError;

/// Raw partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateCompanyJobInput {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub job_description: Option<String>,
    pub job_excerpt: Option<String>,
    pub job_tags: Option<Vec<String>>,
    pub job_type: Option<String>,
    pub job_level: Option<String>,
    pub job_geo: Option<String>,
    pub is_remote: Option<bool>,
    pub salary: Option<Salary>,
    pub requirements: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub url: Option<String>,
    pub application_url: Option<String>,
    pub job_industry: Option<String>,
    pub company_size: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCompanyJobError {
    #[error("Invalid job data")]
    Validation(Vec<FieldError>),

    #[error("Job not found or you don't have permission to edit it")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCompanyJobUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        job_id: Uuid,
        input: UpdateCompanyJobInput,
    ) -> Result<Job, UpdateCompanyJobError>;
}
