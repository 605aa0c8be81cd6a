pub mod change_password;
pub mod fetch_profile;
pub mod login_user;
pub mod register_user;
pub mod update_profile;

pub use change_password::{change_password_handler, ChangePasswordRequest};
pub use fetch_profile::get_current_user_handler;
pub use login_user::{login_user_handler, LoginRequestDto, LoginResponse, LoginUserInfo};
pub use register_user::{
    register_user_handler, RegisterRequestDto, RegisterResponse, SessionUser,
};
pub use update_profile::{update_profile_handler, UpdateProfileRequest};
