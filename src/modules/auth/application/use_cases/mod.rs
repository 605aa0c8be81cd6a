pub mod authenticate_user;
pub mod change_password;
pub mod fetch_profile;
pub mod login_user;
pub mod register_user;
pub mod update_profile;

use crate::auth::application::domain::entities::Account;

/// Token plus the account it was issued for.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub account: Account,
}
