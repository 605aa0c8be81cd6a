use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::company::application::domain::entities::{JobPatch, OwnerScope};
use crate::company::application::ports::incoming::use_cases::{
    UpdateCompanyJobError, UpdateCompanyJobInput, UpdateCompanyJobUseCase,
};
use crate::company::application::ports::outgoing::{CompanyJobRepository, CompanyRepositoryError};
use crate::job::application::domain::entities::{Job, JobLevel, JobType};
use crate::job::application::service::{MAX_EXCERPT_LENGTH, MAX_TITLE_LENGTH};
use crate::shared::validation::{is_http_url, non_blank, FieldError};

/// A present text field must not be blank.
fn present(
    value: Option<String>,
    field: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let raw = value?;
    let trimmed = non_blank(Some(&raw));
    if trimmed.is_none() {
        errors.push(FieldError::new(field, message));
    }
    trimmed
}

fn clean_list(items: Option<Vec<String>>) -> Option<Vec<String>> {
    items.map(|items| {
        items
            .into_iter()
            .filter_map(|item| non_blank(Some(&item)))
            .collect()
    })
}

fn validate(input: UpdateCompanyJobInput) -> Result<JobPatch, Vec<FieldError>> {
    let mut errors = Vec::new();

    let job_title = present(
        input.job_title,
        "jobTitle",
        "Job title cannot be empty",
        &mut errors,
    );
    if job_title
        .as_ref()
        .is_some_and(|t| t.chars().count() > MAX_TITLE_LENGTH)
    {
        errors.push(FieldError::new(
            "jobTitle",
            "Job title cannot exceed 100 characters",
        ));
    }

    let company_name = present(
        input.company_name,
        "companyName",
        "Company name cannot be empty",
        &mut errors,
    );
    let job_description = present(
        input.job_description,
        "jobDescription",
        "Job description cannot be empty",
        &mut errors,
    );
    let job_geo = present(input.job_geo, "jobGeo", "Location cannot be empty", &mut errors);

    let job_excerpt = non_blank(input.job_excerpt.as_deref());
    if job_excerpt
        .as_ref()
        .is_some_and(|e| e.chars().count() > MAX_EXCERPT_LENGTH)
    {
        errors.push(FieldError::new(
            "jobExcerpt",
            "Job excerpt cannot exceed 200 characters",
        ));
    }

    let job_level = match input.job_level.as_deref().map(str::parse::<JobLevel>) {
        None => None,
        Some(Ok(level)) => Some(level),
        Some(Err(_)) => {
            errors.push(FieldError::new("jobLevel", "Invalid job level"));
            None
        }
    };

    let job_type = match input.job_type.as_deref().map(str::parse::<JobType>) {
        None => None,
        Some(Ok(job_type)) => Some(job_type),
        Some(Err(_)) => {
            errors.push(FieldError::new("jobType", "Invalid job type"));
            None
        }
    };

    let url = input.url.map(|u| u.trim().to_string());
    if url.as_deref().is_some_and(|u| !is_http_url(u)) {
        errors.push(FieldError::new("url", "Invalid URL"));
    }

    let application_url = non_blank(input.application_url.as_deref());
    if application_url.as_deref().is_some_and(|u| !is_http_url(u)) {
        errors.push(FieldError::new("applicationUrl", "Invalid URL"));
    }

    if let Some(salary) = &input.salary {
        if let (Some(min), Some(max)) = (salary.min, salary.max) {
            if min > max {
                errors.push(FieldError::new(
                    "salary",
                    "Minimum salary cannot exceed maximum salary",
                ));
            }
        }
        if salary.min.is_some_and(|v| v < 0) || salary.max.is_some_and(|v| v < 0) {
            errors.push(FieldError::new("salary", "Salary cannot be negative"));
        }
    }

    if input.expires_at.is_some_and(|at| at <= Utc::now()) {
        errors.push(FieldError::new(
            "expiresAt",
            "Expiry date must be in the future",
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(JobPatch {
        job_title,
        company_name,
        company_logo: non_blank(input.company_logo.as_deref()),
        job_description,
        job_excerpt,
        job_tags: clean_list(input.job_tags),
        job_type,
        job_level,
        job_geo,
        is_remote: input.is_remote,
        salary: input.salary,
        requirements: clean_list(input.requirements),
        benefits: clean_list(input.benefits),
        url,
        application_url,
        job_industry: non_blank(input.job_industry.as_deref()),
        company_size: non_blank(input.company_size.as_deref()),
        expires_at: input.expires_at,
        is_active: input.is_active,
    })
}

pub struct UpdateCompanyJobService<R>
where
    R: CompanyJobRepository,
{
    repository: R,
}

impl<R> UpdateCompanyJobService<R>
where
    R: CompanyJobRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateCompanyJobUseCase for UpdateCompanyJobService<R>
where
    R: CompanyJobRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        job_id: Uuid,
        input: UpdateCompanyJobInput,
    ) -> Result<Job, UpdateCompanyJobError> {
        let patch = validate(input).map_err(UpdateCompanyJobError::Validation)?;

        let job = self
            .repository
            .update_job(OwnerScope::Owner(user_id), job_id, patch)
            .await
            .map_err(|e| match e {
                CompanyRepositoryError::JobNotFound => UpdateCompanyJobError::NotFound,
                other => UpdateCompanyJobError::RepositoryError(other.to_string()),
            })?;

        info!(job_id = %job.id, user_id = %user_id, "Job updated");
        Ok(job)
    }
}
