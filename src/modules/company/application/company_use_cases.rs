use std::sync::Arc;

use crate::company::application::ports::incoming::use_cases::{
    CompanyDashboardUseCase, DeactivateCompanyJobUseCase, ListApplicantsUseCase,
    ListCompanyJobsUseCase, UpdateApplicationStatusUseCase, UpdateCompanyJobUseCase,
};

#[derive(Clone)]
pub struct CompanyUseCases {
    pub list_jobs: Arc<dyn ListCompanyJobsUseCase + Send + Sync>,
    pub list_applicants: Arc<dyn ListApplicantsUseCase + Send + Sync>,
    pub update_job: Arc<dyn UpdateCompanyJobUseCase + Send + Sync>,
    pub deactivate_job: Arc<dyn DeactivateCompanyJobUseCase + Send + Sync>,
    pub update_application_status: Arc<dyn UpdateApplicationStatusUseCase + Send + Sync>,
    pub dashboard: Arc<dyn CompanyDashboardUseCase + Send + Sync>,
}
