mod deactivate_account;
mod list_applications;
mod list_favorites;
mod update_preferences;
mod user_dashboard;

pub use deactivate_account::{DeactivateAccountError, DeactivateAccountUseCase};
pub use list_applications::{ListApplicationsError, ListApplicationsUseCase};
pub use list_favorites::{ListFavoritesError, ListFavoritesUseCase};
pub use update_preferences::{UpdatePreferencesError, UpdatePreferencesUseCase};
pub use user_dashboard::{
    UserDashboardError, UserDashboardUseCase, DASHBOARD_FAVORITES_LIMIT,
    RECENT_APPLICATIONS_LIMIT, RECOMMENDED_JOBS_LIMIT,
};
