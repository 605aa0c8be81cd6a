pub mod company_dashboard;
pub mod deactivate_company_job;
pub mod list_applicants;
pub mod list_company_jobs;
pub mod update_application_status;
pub mod update_company_job;

pub use company_dashboard::company_dashboard_handler;
pub use deactivate_company_job::deactivate_company_job_handler;
pub use list_applicants::{list_applicants_handler, ApplicantListResponse, ListApplicantsQuery};
pub use list_company_jobs::{list_company_jobs_handler, CompanyJobsQuery, CompanyJobsResponse};
pub use update_application_status::{update_application_status_handler, StatusUpdateRequest};
pub use update_company_job::{update_company_job_handler, UpdateJobRequest};
