pub mod deactivate_account;
pub mod list_applications;
pub mod list_favorites;
pub mod update_preferences;
pub mod user_dashboard;

pub use deactivate_account::deactivate_account_handler;
pub use list_applications::list_applications_handler;
pub use list_favorites::list_favorites_handler;
pub use update_preferences::{update_preferences_handler, UpdatePreferencesRequest};
pub use user_dashboard::user_dashboard_handler;
