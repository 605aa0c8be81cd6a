mod company_dashboard;
mod deactivate_company_job;
mod list_applicants;
mod list_company_jobs;
mod update_application_status;
mod update_company_job;

pub use company_dashboard::{
    CompanyDashboardError, CompanyDashboardUseCase, RECENT_APPLICANTS_LIMIT, TOP_JOBS_LIMIT,
};
pub use deactivate_company_job::{DeactivateCompanyJobError, DeactivateCompanyJobUseCase};
pub use list_applicants::{ListApplicantsError, ListApplicantsUseCase, DEFAULT_APPLICANT_PAGE_SIZE};
pub use list_company_jobs::{CompanyJobsPage, ListCompanyJobsError, ListCompanyJobsUseCase};
pub use update_application_status::{
    UpdateApplicationStatusError, UpdateApplicationStatusUseCase,
};
pub use update_company_job::{UpdateCompanyJobError, UpdateCompanyJobInput, UpdateCompanyJobUseCase};
