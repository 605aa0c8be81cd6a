pub mod application_repository;
pub mod external_jobs_gateway;
pub mod favorite_repository;
pub mod job_query;
pub mod job_repository;

pub use application_repository::{ApplicationRepository, ApplicationRepositoryError};
pub use external_jobs_gateway::{ExternalJobsError, ExternalJobsGateway};
pub use favorite_repository::{FavoriteRepository, FavoriteRepositoryError};
pub use job_query::{JobQuery, JobQueryError};
pub use job_repository::{JobRepository, JobRepositoryError};
