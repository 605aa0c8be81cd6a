pub mod company_job_query_postgres;
pub mod company_job_repository_postgres;

pub use company_job_query_postgres::CompanyJobQueryPostgres;
pub use company_job_repository_postgres::CompanyJobRepositoryPostgres;
