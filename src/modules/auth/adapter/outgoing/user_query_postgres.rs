use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};
use crate::auth::application::ports::outgoing::user_query::{UserQueryError, UserQueryResult};
use crate::modules::auth::application::ports::outgoing::UserQuery;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_query_result(model: UserModel) -> Result<UserQueryResult, UserQueryError> {
        model
            .into_query_result()
            .map_err(UserQueryError::SerializationError)
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::map_to_query_result).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        // Stored emails are always lowercased on write.
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::map_to_query_result).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use serde_json::json;

    fn user_model(id: Uuid) -> UserModel {
        let now = Utc::now().fixed_offset();
        UserModel {
            id,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "hashed_password".to_string(),
            role: "company".to_string(),
            profile: json!({ "bio": "Hiring", "skills": ["rust"] }),
            preferences: json!({}),
            is_active: true,
            email_verified: false,
            password_reset_token: None,
            password_reset_expires: None,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn find_by_id_decodes_role_and_profile() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(user_id)]])
            .into_connection();

        let user = UserQueryPostgres::new(Arc::new(db))
            .find_by_id(user_id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.id, user_id);
        assert_eq!(user.role, Role::Company);
        assert_eq!(user.profile.bio.as_deref(), Some("Hiring"));
        assert_eq!(user.profile.skills, vec!["rust"]);
    }

    #[tokio::test]
    async fn find_by_email_returns_none_when_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let result = UserQueryPostgres::new(Arc::new(db))
            .find_by_email("ANA@example.com")
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn unknown_role_is_a_serialization_error() {
        let user_id = Uuid::new_v4();
        let mut model = user_model(user_id);
        model.role = "superuser".into();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let result = UserQueryPostgres::new(Arc::new(db))
            .find_by_id(user_id)
            .await;

        assert!(matches!(result, Err(UserQueryError::SerializationError(_))));
    }

    #[tokio::test]
    async fn database_failure_is_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let result = UserQueryPostgres::new(Arc::new(db))
            .find_by_id(Uuid::new_v4())
            .await;

        match result {
            Err(UserQueryError::DatabaseError(msg)) => assert!(msg.contains("connection timeout")),
            other => panic!("expected DatabaseError, got {other:?}"),
        }
    }
}
