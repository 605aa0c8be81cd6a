pub mod favorite_jobs;
pub mod job_applications;
pub mod jobs;
