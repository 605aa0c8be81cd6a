use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Account, UserPreferences};
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, ProfileChanges,
};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_account(model: UserModel) -> Result<Account, UserRepositoryError> {
        model
            .into_query_result()
            .map(|user| user.into_account())
            .map_err(UserRepositoryError::SerializationError)
    }

    fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, UserRepositoryError> {
        serde_json::to_value(value).map_err(|e| UserRepositoryError::SerializationError(e.to_string()))
    }

    /// Runs a single-column update and reports a missing row as `UserNotFound`.
    async fn update_column(
        &self,
        user_id: Uuid,
        column: UserColumn,
        value: SimpleExpr,
    ) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(column, value)
            .filter(UserColumn::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}

fn is_unique_violation(e: &DbErr) -> bool {
    let err_str = e.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    if is_unique_violation(&e) {
        return UserRepositoryError::EmailAlreadyExists;
    }
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<Account, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            role: Set(user.role.as_str().to_string()),
            profile: Set(serde_json::json!({})),
            preferences: Set(serde_json::json!({})),
            is_active: Set(true),
            email_verified: Set(false),
            password_reset_token: Set(None),
            password_reset_expires: Set(None),
            last_login: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(map_db_err)?;

        Self::to_account(inserted)
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Account, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        if changes.is_empty() {
            return Self::to_account(user);
        }

        let mut active_user: UserActiveModel = user.into();
        if let Some(name) = changes.name {
            active_user.name = Set(name);
        }
        if let Some(email) = changes.email {
            active_user.email = Set(email);
        }
        if let Some(profile) = changes.profile {
            active_user.profile = Set(Self::to_json(&profile)?);
        }

        let updated = active_user.update(&*self.db).await.map_err(map_db_err)?;

        Self::to_account(updated)
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        self.update_column(
            user_id,
            UserColumn::PasswordHash,
            Expr::value(new_password_hash),
        )
        .await
    }

    async fn record_login(&self, user_id: Uuid, at: DateTime<Utc>) -> Result<(), UserRepositoryError> {
        self.update_column(user_id, UserColumn::LastLogin, Expr::value(at.fixed_offset()))
            .await
    }

    async fn update_preferences(
        &self,
        user_id: Uuid,
        preferences: UserPreferences,
    ) -> Result<UserPreferences, UserRepositoryError> {
        let json = Self::to_json(&preferences)?;
        self.update_column(user_id, UserColumn::Preferences, Expr::value(json))
            .await?;
        Ok(preferences)
    }

    async fn deactivate(
        &self,
        user_id: Uuid,
        replacement_email: String,
    ) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::IsActive, Expr::value(false))
            .col_expr(UserColumn::Email, Expr::value(replacement_email))
            .filter(UserColumn::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}
