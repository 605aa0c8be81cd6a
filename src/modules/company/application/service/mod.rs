mod company_dashboard_service;
mod deactivate_company_job_service;
mod list_applicants_service;
mod list_company_jobs_service;
mod update_application_status_service;
mod update_company_job_service;

pub use company_dashboard_service::CompanyDashboardService;
pub use deactivate_company_job_service::DeactivateCompanyJobService;
pub use list_applicants_service::ListApplicantsService;
pub use list_company_jobs_service::ListCompanyJobsService;
pub use update_application_status_service::UpdateApplicationStatusService;
pub use update_company_job_service::UpdateCompanyJobService;
