mod apply_to_job_service;
mod create_job_service;
mod get_job_service;
mod list_jobs_service;
mod list_random_jobs_service;
mod toggle_favorite_service;

pub use apply_to_job_service::ApplyToJobService;
pub use create_job_service::{CreateJobService, MAX_EXCERPT_LENGTH, MAX_TITLE_LENGTH};
pub use get_job_service::GetJobService;
pub use list_jobs_service::ListJobsService;
pub use list_random_jobs_service::{
    ListRandomJobsService, RandomJobsSettings, DEFAULT_TECH_CATALOGUE,
};
pub use toggle_favorite_service::ToggleFavoriteService;
