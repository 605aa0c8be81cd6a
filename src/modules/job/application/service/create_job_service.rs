use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::job::application::domain::entities::{Job, JobLevel, JobType, NewJob};
use crate::job::application::ports::incoming::use_cases::{
    CreateJobError, CreateJobInput, CreateJobUseCase,
};
use crate::job::application::ports::outgoing::JobRepository;
use crate::shared::validation::{is_http_url, non_blank, FieldError};

pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_EXCERPT_LENGTH: usize = 200;

fn required(value: Option<&str>, field: &str, message: &str, errors: &mut Vec<FieldError>) -> String {
    match non_blank(value) {
        Some(v) => v,
        None => {
            errors.push(FieldError::new(field, message));
            String::new()
        }
    }
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| non_blank(Some(&item)))
        .collect()
}

fn validate(owner_id: Uuid, input: CreateJobInput) -> Result<NewJob, Vec<FieldError>> {
    let mut errors = Vec::new();

    let job_title = required(
        input.job_title.as_deref(),
        "jobTitle",
        "Job title is required",
        &mut errors,
    );
    if job_title.chars().count() > MAX_TITLE_LENGTH {
        errors.push(FieldError::new(
            "jobTitle",
            "Job title cannot exceed 100 characters",
        ));
    }

    let company_name = required(
        input.company_name.as_deref(),
        "companyName",
        "Company name is required",
        &mut errors,
    );
    let job_description = required(
        input.job_description.as_deref(),
        "jobDescription",
        "Job description is required",
        &mut errors,
    );
    let job_geo = required(
        input.job_geo.as_deref(),
        "jobGeo",
        "Location is required",
        &mut errors,
    );

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

    let job_level = match non_blank(input.job_level.as_deref()).map(|l| l.parse::<JobLevel>()) {
        Some(Ok(level)) => Some(level),
        _ => {
            errors.push(FieldError::new("jobLevel", "Invalid job level"));
            None
        }
    };

    let job_type = match non_blank(input.job_type.as_deref()).map(|t| t.parse::<JobType>()) {
        None => JobType::default(),
        Some(Ok(job_type)) => job_type,
        Some(Err(_)) => {
            errors.push(FieldError::new("jobType", "Invalid job type"));
            JobType::default()
        }
    };

    let url = non_blank(input.url.as_deref()).unwrap_or_default();
    if !is_http_url(&url) {
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

    let Some(job_level) = job_level else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewJob {
        job_title,
        company_name,
        company_logo: non_blank(input.company_logo.as_deref()),
        job_description,
        job_excerpt,
        job_tags: clean_list(input.job_tags),
        job_type,
        job_level,
        job_geo,
        is_remote: input.is_remote.unwrap_or(true),
        salary: input.salary,
        requirements: clean_list(input.requirements),
        benefits: clean_list(input.benefits),
        url,
        application_url,
        job_industry: non_blank(input.job_industry.as_deref()),
        company_size: non_blank(input.company_size.as_deref()),
        expires_at: input.expires_at,
        posted_by: owner_id,
    })
}

pub struct CreateJobService<R>
where
    R: JobRepository,
{
    repository: R,
}

impl<R> CreateJobService<R>
where
    R: JobRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateJobUseCase for CreateJobService<R>
where
    R: JobRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner_id: Uuid,
        owner_role: Role,
        input: CreateJobInput,
    ) -> Result<Job, CreateJobError> {
        if !owner_role.can_manage_postings() {
            return Err(CreateJobError::Forbidden);
        }

        let new_job = validate(owner_id, input).map_err(CreateJobError::Validation)?;

        let job = self
            .repository
            .create(new_job)
            .await
            .map_err(|e| CreateJobError::RepositoryError(e.to_string()))?;

        info!(job_id = %job.id, owner_id = %owner_id, "Job posted");
        Ok(job)
    }
}
