// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{
    Account, Role, UserPreferences, UserProfile,
};

/// Full user row as read by the auth flows.
/// The password hash never leaves the application layer: handlers get an `Account`.
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub profile: UserProfile,
    pub preferences: UserPreferences,
    pub is_active: bool,
    pub email_verified: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserQueryResult {
    pub fn into_account(self) -> Account {
        Account {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            profile: self.profile,
            preferences: self.preferences,
            is_active: self.is_active,
            email_verified: self.email_verified,
            last_login: self.last_login,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupted user row: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError>;
    /// Case-insensitive lookup.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError>;
}
