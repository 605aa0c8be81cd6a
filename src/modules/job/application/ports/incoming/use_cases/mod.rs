mod apply_to_job;
mod create_job;
mod get_job;
mod list_jobs;
mod list_random_jobs;
mod toggle_favorite;

pub use apply_to_job::{ApplyToJobError, ApplyToJobInput, ApplyToJobUseCase};
pub use create_job::{CreateJobError, CreateJobInput, CreateJobUseCase};
pub use get_job::{GetJobError, GetJobUseCase};
pub use list_jobs::{ListJobsError, ListJobsUseCase};
pub use list_random_jobs::{
    ListRandomJobsError, ListRandomJobsUseCase, RandomJobs, DEFAULT_RANDOM_COUNT,
    MAX_RANDOM_COUNT,
};
pub use toggle_favorite::{ToggleFavoriteError, ToggleFavoriteUseCase};
