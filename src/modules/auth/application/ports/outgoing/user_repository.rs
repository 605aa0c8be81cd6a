use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{
    Account, Role, UserPreferences, UserProfile,
};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    /// Already lowercased.
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Fields a user may change on their own account. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile: Option<UserProfile>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.profile.is_none()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<Account, UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Account, UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn record_login(
        &self,
        user_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    /// Replaces the preferences object wholesale.
    async fn update_preferences(
        &self,
        user_id: Uuid,
        preferences: UserPreferences,
    ) -> Result<UserPreferences, UserRepositoryError>;

    /// Soft delete: clears `is_active` and stores the rewritten email.
    async fn deactivate(
        &self,
        user_id: Uuid,
        replacement_email: String,
    ) -> Result<(), UserRepositoryError>;
}
