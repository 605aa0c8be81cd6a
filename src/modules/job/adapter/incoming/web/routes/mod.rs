pub mod apply_to_job;
pub mod create_job;
pub mod get_job;
pub mod list_jobs;
pub mod list_random_jobs;
pub mod toggle_favorite;

pub use apply_to_job::{apply_to_job_handler, ApplyRequest};
pub use create_job::{create_job_handler, CreateJobRequest, SalaryDto};
pub use get_job::{get_job_handler, JobDetailView};
pub use list_jobs::{list_jobs_handler, JobListResponse, ListJobsQuery};
pub use list_random_jobs::{list_random_jobs_handler, RandomJobsQuery, RandomJobsResponse};
pub use toggle_favorite::{toggle_favorite_handler, ToggleFavoriteResponse};
