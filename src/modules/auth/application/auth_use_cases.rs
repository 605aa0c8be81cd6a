use std::sync::Arc;

use super::use_cases::{
    authenticate_user::IAuthenticateUserUseCase, change_password::IChangePasswordUseCase,
    fetch_profile::IFetchProfileUseCase, login_user::ILoginUserUseCase,
    register_user::IRegisterUserUseCase, update_profile::IUpdateProfileUseCase,
};

/// Everything the auth routes and extractors need, held behind trait objects.
#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub authenticate: Arc<dyn IAuthenticateUserUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub change_password: Arc<dyn IChangePasswordUseCase + Send + Sync>,
}
