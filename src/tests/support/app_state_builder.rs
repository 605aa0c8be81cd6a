use std::sync::Arc;

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::{
    authenticate_user::IAuthenticateUserUseCase, change_password::IChangePasswordUseCase,
    fetch_profile::IFetchProfileUseCase, login_user::ILoginUserUseCase,
    register_user::IRegisterUserUseCase, update_profile::IUpdateProfileUseCase,
};
use crate::company::application::company_use_cases::CompanyUseCases;
use crate::company::application::ports::incoming::use_cases::{
    CompanyDashboardUseCase, DeactivateCompanyJobUseCase, ListApplicantsUseCase,
    ListCompanyJobsUseCase, UpdateApplicationStatusUseCase, UpdateCompanyJobUseCase,
};
use crate::job::application::job_use_cases::JobUseCases;
use crate::job::application::ports::incoming::use_cases::{
    ApplyToJobUseCase, CreateJobUseCase, GetJobUseCase, ListJobsUseCase, ListRandomJobsUseCase,
    ToggleFavoriteUseCase,
};
use crate::tests::support::stubs::*;
use crate::user::application::ports::incoming::use_cases::{
    DeactivateAccountUseCase, ListApplicationsUseCase, ListFavoritesUseCase,
    UpdatePreferencesUseCase, UserDashboardUseCase,
};
use crate::user::application::user_console_use_cases::UserConsoleUseCases;
use crate::AppState;

/// Builds an [`AppState`] where every use case is a stub unless replaced.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    jobs: JobUseCases,
    company: CompanyUseCases,
    users: UserConsoleUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUseCase),
                login: Arc::new(StubLoginUseCase),
                authenticate: Arc::new(StubAuthenticateUseCase::default()),
                fetch_profile: Arc::new(StubFetchProfileUseCase),
                update_profile: Arc::new(StubUpdateProfileUseCase),
                change_password: Arc::new(StubChangePasswordUseCase),
            },
            jobs: JobUseCases {
                list: Arc::new(StubListJobsUseCase),
                get: Arc::new(StubGetJobUseCase),
                random: Arc::new(StubRandomJobsUseCase),
                create: Arc::new(StubCreateJobUseCase),
                apply: Arc::new(StubApplyUseCase),
                toggle_favorite: Arc::new(StubToggleFavoriteUseCase),
            },
            company: CompanyUseCases {
                list_jobs: Arc::new(StubCompanyJobsUseCase),
                list_applicants: Arc::new(StubApplicantsUseCase),
                update_job: Arc::new(StubUpdateCompanyJobUseCase),
                deactivate_job: Arc::new(StubDeactivateCompanyJobUseCase),
                update_application_status: Arc::new(StubApplicationStatusUseCase),
                dashboard: Arc::new(StubCompanyDashboardUseCase),
            },
            users: UserConsoleUseCases {
                applications: Arc::new(StubUserApplicationsUseCase),
                favorites: Arc::new(StubUserFavoritesUseCase),
                update_preferences: Arc::new(StubUpdatePreferencesUseCase),
                dashboard: Arc::new(StubUserDashboardUseCase),
                deactivate_account: Arc::new(StubDeactivateAccountUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register(mut self, uc: Arc<dyn IRegisterUserUseCase + Send + Sync>) -> Self {
        self.auth.register = uc;
        self
    }

    pub fn with_login(mut self, uc: Arc<dyn ILoginUserUseCase + Send + Sync>) -> Self {
        self.auth.login = uc;
        self
    }

    pub fn with_authenticate(
        mut self,
        uc: Arc<dyn IAuthenticateUserUseCase + Send + Sync>,
    ) -> Self {
        self.auth.authenticate = uc;
        self
    }

    pub fn with_fetch_profile(mut self, uc: Arc<dyn IFetchProfileUseCase + Send + Sync>) -> Self {
        self.auth.fetch_profile = uc;
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    ) -> Self {
        self.auth.update_profile = uc;
        self
    }

    pub fn with_change_password(
        mut self,
        uc: Arc<dyn IChangePasswordUseCase + Send + Sync>,
    ) -> Self {
        self.auth.change_password = uc;
        self
    }

    pub fn with_list_jobs(mut self, uc: Arc<dyn ListJobsUseCase + Send + Sync>) -> Self {
        self.jobs.list = uc;
        self
    }

    pub fn with_get_job(mut self, uc: Arc<dyn GetJobUseCase + Send + Sync>) -> Self {
        self.jobs.get = uc;
        self
    }

    pub fn with_random_jobs(mut self, uc: Arc<dyn ListRandomJobsUseCase + Send + Sync>) -> Self {
        self.jobs.random = uc;
        self
    }

    pub fn with_create_job(mut self, uc: Arc<dyn CreateJobUseCase + Send + Sync>) -> Self {
        self.jobs.create = uc;
        self
    }

    pub fn with_apply(mut self, uc: Arc<dyn ApplyToJobUseCase + Send + Sync>) -> Self {
        self.jobs.apply = uc;
        self
    }

    pub fn with_toggle_favorite(
        mut self,
        uc: Arc<dyn ToggleFavoriteUseCase + Send + Sync>,
    ) -> Self {
        self.jobs.toggle_favorite = uc;
        self
    }

    pub fn with_company_jobs(mut self, uc: Arc<dyn ListCompanyJobsUseCase + Send + Sync>) -> Self {
        self.company.list_jobs = uc;
        self
    }

    pub fn with_applicants(mut self, uc: Arc<dyn ListApplicantsUseCase + Send + Sync>) -> Self {
        self.company.list_applicants = uc;
        self
    }

    pub fn with_update_company_job(
        mut self,
        uc: Arc<dyn UpdateCompanyJobUseCase + Send + Sync>,
    ) -> Self {
        self.company.update_job = uc;
        self
    }

    pub fn with_deactivate_company_job(
        mut self,
        uc: Arc<dyn DeactivateCompanyJobUseCase + Send + Sync>,
    ) -> Self {
        self.company.deactivate_job = uc;
        self
    }

    pub fn with_application_status(
        mut self,
        uc: Arc<dyn UpdateApplicationStatusUseCase + Send + Sync>,
    ) -> Self {
        self.company.update_application_status = uc;
        self
    }

    pub fn with_company_dashboard(
        mut self,
        uc: Arc<dyn CompanyDashboardUseCase + Send + Sync>,
    ) -> Self {
        self.company.dashboard = uc;
        self
    }

    pub fn with_user_applications(
        mut self,
        uc: Arc<dyn ListApplicationsUseCase + Send + Sync>,
    ) -> Self {
        self.users.applications = uc;
        self
    }

    pub fn with_user_favorites(mut self, uc: Arc<dyn ListFavoritesUseCase + Send + Sync>) -> Self {
        self.users.favorites = uc;
        self
    }

    pub fn with_update_preferences(
        mut self,
        uc: Arc<dyn UpdatePreferencesUseCase + Send + Sync>,
    ) -> Self {
        self.users.update_preferences = uc;
        self
    }

    pub fn with_user_dashboard(mut self, uc: Arc<dyn UserDashboardUseCase + Send + Sync>) -> Self {
        self.users.dashboard = uc;
        self
    }

    pub fn with_deactivate_account(
        mut self,
        uc: Arc<dyn DeactivateAccountUseCase + Send + Sync>,
    ) -> Self {
        self.users.deactivate_account = uc;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            jobs: self.jobs,
            company: self.company,
            users: self.users,
        })
    }
}
