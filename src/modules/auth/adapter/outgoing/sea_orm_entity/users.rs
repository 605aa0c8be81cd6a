use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::{Role, UserPreferences, UserProfile};
use crate::auth::application::ports::outgoing::user_query::UserQueryResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub profile: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub preferences: Json,
    pub is_active: bool,
    pub email_verified: bool,
    pub password_reset_token: Option<String>,
    pub password_reset_expires: Option<DateTimeWithTimeZone>,
    pub last_login: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// updated_at is maintained by the update_users_updated_at trigger.
impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Decodes the role and JSONB columns. A failure means the row was
    /// written outside this service.
    pub fn into_query_result(self) -> Result<UserQueryResult, String> {
        let role = self
            .role
            .parse::<Role>()
            .map_err(|e| e.to_string())?;
        let profile: UserProfile = if self.profile.is_null() {
            UserProfile::default()
        } else {
            serde_json::from_value(self.profile).map_err(|e| format!("profile: {e}"))?
        };
        let preferences: UserPreferences = if self.preferences.is_null() {
            UserPreferences::default()
        } else {
            serde_json::from_value(self.preferences).map_err(|e| format!("preferences: {e}"))?
        };

        Ok(UserQueryResult {
            id: self.id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            role,
            profile,
            preferences,
            is_active: self.is_active,
            email_verified: self.email_verified,
            last_login: self.last_login.map(|t| t.with_timezone(&chrono::Utc)),
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}
