use std::sync::Arc;

use crate::user::application::ports::incoming::use_cases::{
    DeactivateAccountUseCase, ListApplicationsUseCase, ListFavoritesUseCase,
    UpdatePreferencesUseCase, UserDashboardUseCase,
};

#[derive(Clone)]
pub struct UserConsoleUseCases {
    pub applications: Arc<dyn ListApplicationsUseCase + Send + Sync>,
    pub favorites: Arc<dyn ListFavoritesUseCase + Send + Sync>,
    pub update_preferences: Arc<dyn UpdatePreferencesUseCase + Send + Sync>,
    pub dashboard: Arc<dyn UserDashboardUseCase + Send + Sync>,
    pub deactivate_account: Arc<dyn DeactivateAccountUseCase + Send + Sync>,
}
