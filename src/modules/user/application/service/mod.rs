pub mod deactivate_account_service;
pub mod list_applications_service;
pub mod list_favorites_service;
pub mod update_preferences_service;
pub mod user_dashboard_service;

pub use deactivate_account_service::DeactivateAccountService;
pub use list_applications_service::ListApplicationsService;
pub use list_favorites_service::ListFavoritesService;
pub use update_preferences_service::UpdatePreferencesService;
pub use user_dashboard_service::UserDashboardService;
