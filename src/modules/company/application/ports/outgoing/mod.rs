pub mod company_job_query;
pub mod company_job_repository;

pub use company_job_query::{CompanyJobQuery, CompanyQueryError};
pub use company_job_repository::{CompanyJobRepository, CompanyRepositoryError};
