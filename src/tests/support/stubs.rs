//! Placeholder use cases for route tests. Each test swaps in the one it
//! exercises; the rest panic if a handler reaches them.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{
    Account, Role, UserPreferences, UserProfile,
};
use crate::auth::application::ports::outgoing::token_provider::TokenError;
use crate::auth::application::use_cases::{
    authenticate_user::{AuthenticateError, IAuthenticateUserUseCase},
    change_password::{ChangePasswordError, ChangePasswordInput, IChangePasswordUseCase},
    fetch_profile::{FetchProfileError, IFetchProfileUseCase, ProfileView},
    login_user::{ILoginUserUseCase, LoginError, LoginRequest},
    register_user::{IRegisterUserUseCase, RegisterUserError, RegisterUserInput},
    update_profile::{IUpdateProfileUseCase, UpdateProfileError, UpdateProfileInput},
    AuthSession,
};
use crate::company::application::domain::entities::{ApplicantEntry, CompanyDashboard};
use crate::company::application::ports::incoming::use_cases::{
    CompanyDashboardError, CompanyDashboardUseCase, CompanyJobsPage, DeactivateCompanyJobError,
    DeactivateCompanyJobUseCase, ListApplicantsError, ListApplicantsUseCase,
    ListCompanyJobsError, ListCompanyJobsUseCase, UpdateApplicationStatusError,
    UpdateApplicationStatusUseCase, UpdateCompanyJobError, UpdateCompanyJobInput,
    UpdateCompanyJobUseCase,
};
use crate::job::application::domain::entities::{ApplicationStatus, Job, JobDetail, JobFilters};
use crate::job::application::ports::incoming::use_cases::{
    ApplyToJobError, ApplyToJobInput, ApplyToJobUseCase, CreateJobError, CreateJobInput,
    CreateJobUseCase, GetJobError, GetJobUseCase, ListJobsError, ListJobsUseCase,
    ListRandomJobsError, ListRandomJobsUseCase, RandomJobs, ToggleFavoriteError,
    ToggleFavoriteUseCase,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::user::application::domain::entities::{UserApplication, UserDashboard};
use crate::user::application::ports::incoming::use_cases::{
    DeactivateAccountError, DeactivateAccountUseCase, ListApplicationsError,
    ListApplicationsUseCase, ListFavoritesError, ListFavoritesUseCase, UpdatePreferencesError,
    UpdatePreferencesUseCase, UserDashboardError, UserDashboardUseCase,
};

pub fn sample_account(role: Role) -> Account {
    let now = Utc::now();
    Account {
        id: Uuid::new_v4(),
        name: "Test User".to_string(),
        email: format!("test.{}@example.com", role),
        role,
        profile: UserProfile::default(),
        preferences: UserPreferences::default(),
        is_active: true,
        email_verified: false,
        last_login: None,
        created_at: now,
        updated_at: now,
    }
}

// ──────────────────────────────────────────────────────────
// auth
// ──────────────────────────────────────────────────────────

/// Rejects every token unless built with [`StubAuthenticateUseCase::accepting`].
#[derive(Default)]
pub struct StubAuthenticateUseCase {
    accepted: Option<(String, Account)>,
}

impl StubAuthenticateUseCase {
    pub fn accepting(token: &str, account: Account) -> Self {
        Self {
            accepted: Some((token.to_string(), account)),
        }
    }
}

#[async_trait]
impl IAuthenticateUserUseCase for StubAuthenticateUseCase {
    async fn execute(&self, token: &str) -> Result<Account, AuthenticateError> {
        match &self.accepted {
            Some((expected, account)) if expected == token => Ok(account.clone()),
            _ => Err(AuthenticateError::InvalidToken(TokenError::MalformedToken)),
        }
    }
}

pub struct StubRegisterUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUseCase {
    async fn execute(&self, _input: RegisterUserInput) -> Result<AuthSession, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubLoginUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<AuthSession, LoginError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<ProfileView, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUpdateProfileUseCase;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _input: UpdateProfileInput,
    ) -> Result<Account, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubChangePasswordUseCase;

#[async_trait]
impl IChangePasswordUseCase for StubChangePasswordUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _input: ChangePasswordInput,
    ) -> Result<(), ChangePasswordError> {
        unimplemented!("Not used in this test")
    }
}

// ──────────────────────────────────────────────────────────
// jobs
// ──────────────────────────────────────────────────────────

pub struct StubListJobsUseCase;

#[async_trait]
impl ListJobsUseCase for StubListJobsUseCase {
    async fn execute(
        &self,
        _filters: JobFilters,
        _page: PageRequest,
    ) -> Result<PageResult<Job>, ListJobsError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubGetJobUseCase;

#[async_trait]
impl GetJobUseCase for StubGetJobUseCase {
    async fn execute(&self, _job_id: Uuid) -> Result<JobDetail, GetJobError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubRandomJobsUseCase;

#[async_trait]
impl ListRandomJobsUseCase for StubRandomJobsUseCase {
    async fn execute(&self, _count: u32) -> Result<RandomJobs, ListRandomJobsError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubCreateJobUseCase;

#[async_trait]
impl CreateJobUseCase for StubCreateJobUseCase {
    async fn execute(
        &self,
        _owner_id: Uuid,
        _owner_role: Role,
        _input: CreateJobInput,
    ) -> Result<Job, CreateJobError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubApplyUseCase;

#[async_trait]
impl ApplyToJobUseCase for StubApplyUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _job_id: Uuid,
        _input: ApplyToJobInput,
    ) -> Result<(), ApplyToJobError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubToggleFavoriteUseCase;

#[async_trait]
impl ToggleFavoriteUseCase for StubToggleFavoriteUseCase {
    async fn execute(&self, _user_id: Uuid, _job_id: Uuid) -> Result<bool, ToggleFavoriteError> {
        unimplemented!("Not used in this test")
    }
}

// ──────────────────────────────────────────────────────────
// company console
// ──────────────────────────────────────────────────────────

pub struct StubCompanyJobsUseCase;

#[async_trait]
impl ListCompanyJobsUseCase for StubCompanyJobsUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _page: PageRequest,
    ) -> Result<CompanyJobsPage, ListCompanyJobsError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubApplicantsUseCase;

#[async_trait]
impl ListApplicantsUseCase for StubApplicantsUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _status: Option<ApplicationStatus>,
        _page: PageRequest,
    ) -> Result<PageResult<ApplicantEntry>, ListApplicantsError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUpdateCompanyJobUseCase;

#[async_trait]
impl UpdateCompanyJobUseCase for StubUpdateCompanyJobUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _job_id: Uuid,
        _input: UpdateCompanyJobInput,
    ) -> Result<Job, UpdateCompanyJobError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubDeactivateCompanyJobUseCase;

#[async_trait]
impl DeactivateCompanyJobUseCase for StubDeactivateCompanyJobUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _role: Role,
        _job_id: Uuid,
    ) -> Result<(), DeactivateCompanyJobError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubApplicationStatusUseCase;

#[async_trait]
impl UpdateApplicationStatusUseCase for StubApplicationStatusUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _job_id: Uuid,
        _applicant_id: Uuid,
        _status: Option<String>,
    ) -> Result<ApplicationStatus, UpdateApplicationStatusError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubCompanyDashboardUseCase;

#[async_trait]
impl CompanyDashboardUseCase for StubCompanyDashboardUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
    ) -> Result<CompanyDashboard, CompanyDashboardError> {
        unimplemented!("Not used in this test")
    }
}

// ──────────────────────────────────────────────────────────
// user console
// ──────────────────────────────────────────────────────────

pub struct StubUserApplicationsUseCase;

#[async_trait]
impl ListApplicationsUseCase for StubUserApplicationsUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<Vec<UserApplication>, ListApplicationsError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUserFavoritesUseCase;

#[async_trait]
impl ListFavoritesUseCase for StubUserFavoritesUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<Vec<Job>, ListFavoritesError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUpdatePreferencesUseCase;

#[async_trait]
impl UpdatePreferencesUseCase for StubUpdatePreferencesUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _preferences: serde_json::Value,
    ) -> Result<UserPreferences, UpdatePreferencesError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubUserDashboardUseCase;

#[async_trait]
impl UserDashboardUseCase for StubUserDashboardUseCase {
    async fn execute(&self, _account: &Account) -> Result<UserDashboard, UserDashboardError> {
        unimplemented!("Not used in this test")
    }
}

pub struct StubDeactivateAccountUseCase;

#[async_trait]
impl DeactivateAccountUseCase for StubDeactivateAccountUseCase {
    async fn execute(&self, _account: &Account) -> Result<(), DeactivateAccountError> {
        unimplemented!("Not used in this test")
    }
}
