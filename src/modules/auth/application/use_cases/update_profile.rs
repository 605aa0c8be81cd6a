use async_trait::async_trait;
use uuid::Uuid;

use super::register_user::MAX_NAME_LENGTH;
use crate::auth::application::domain::entities::{Account, UserProfile};
use crate::auth::application::ports::outgoing::user_repository::ProfileChanges;
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository, UserRepositoryError};
use crate::shared::validation::{normalize_email, FieldError};

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("Invalid profile data")]
    Validation(Vec<FieldError>),

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

fn validate(input: UpdateProfileInput) -> Result<ProfileChanges, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = input.name.map(|n| n.trim().to_string());
    if let Some(n) = &name {
        if n.is_empty() {
            errors.push(FieldError::new("name", "Name cannot be empty"));
        } else if n.chars().count() > MAX_NAME_LENGTH {
            errors.push(FieldError::new("name", "Name cannot exceed 50 characters"));
        }
    }

    let email = match input.email.as_deref().map(normalize_email) {
        Some(Ok(email)) => Some(email),
        Some(Err(error)) => {
            errors.push(error);
            None
        }
        None => None,
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ProfileChanges {
        name,
        email,
        profile: input.profile,
    })
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<Account, UpdateProfileError>;
}

pub struct UpdateProfileUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateProfileUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IUpdateProfileUseCase for UpdateProfileUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateProfileInput,
    ) -> Result<Account, UpdateProfileError> {
        let changes = validate(input).map_err(UpdateProfileError::Validation)?;

        let current = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProfileError::UserNotFound)?;

        if changes.is_empty() {
            return Ok(current.into_account());
        }

        if let Some(email) = changes.email.as_deref() {
            if email != current.email {
                let taken = self
                    .query
                    .find_by_email(email)
                    .await
                    .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?;
                if taken.is_some_and(|other| other.id != user_id) {
                    return Err(UpdateProfileError::EmailAlreadyExists);
                }
            }
        }

        self.repository
            .update_profile(user_id, changes)
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => UpdateProfileError::EmailAlreadyExists,
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::tests::support::auth_helper::seed_user;
    use crate::tests::support::fixtures::email_of_length;
    use crate::tests::support::in_memory::InMemoryStore;

    fn use_case(store: &InMemoryStore) -> UpdateProfileUseCase<InMemoryStore, InMemoryStore> {
        UpdateProfileUseCase::new(store.clone(), store.clone())
    }

    #[tokio::test]
    async fn updates_name_email_and_profile() {
        let store = InMemoryStore::default();
        let user = seed_user(&store, "ana@example.com", "secret1", Role::User).await;

        let account = use_case(&store)
            .execute(
                user.id,
                UpdateProfileInput {
                    name: Some(" Ana Maria ".into()),
                    email: Some("Ana.Maria@Example.com".into()),
                    profile: Some(UserProfile {
                        bio: Some("Rust dev".into()),
                        skills: vec!["rust".into()],
                        ..Default::default()
                    }),
                },
            )
            .await
            .unwrap();

        assert_eq!(account.name, "Ana Maria");
        assert_eq!(account.email, "ana.maria@example.com");
        assert_eq!(account.profile.bio.as_deref(), Some("Rust dev"));
    }

    #[tokio::test]
    async fn email_owned_by_someone_else_is_rejected() {
        let store = InMemoryStore::default();
        let user = seed_user(&store, "ana@example.com", "secret1", Role::User).await;
        seed_user(&store, "taken@example.com", "secret1", Role::User).await;

        let result = use_case(&store)
            .execute(
                user.id,
                UpdateProfileInput {
                    email: Some("taken@example.com".into()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(UpdateProfileError::EmailAlreadyExists)));
    }

    #[tokio::test]
    async fn keeping_own_email_is_allowed() {
        let store = InMemoryStore::default();
        let user = seed_user(&store, "ana@example.com", "secret1", Role::User).await;

        let account = use_case(&store)
            .execute(
                user.id,
                UpdateProfileInput {
                    email: Some("ANA@example.com".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(account.email, "ana@example.com");
    }

    #[tokio::test]
    async fn blank_name_is_a_validation_error() {
        let store = InMemoryStore::default();
        let user = seed_user(&store, "ana@example.com", "secret1", Role::User).await;

        let result = use_case(&store)
            .execute(
                user.id,
                UpdateProfileInput {
                    name: Some("   ".into()),
                    email: Some("broken".into()),
                    ..Default::default()
                },
            )
            .await;

        match result {
            Err(UpdateProfileError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn email_longer_than_storage_allows_is_rejected() {
        let store = InMemoryStore::default();
        let user = seed_user(&store, "ana@example.com", "secret1", Role::User).await;
        let long_email = email_of_length(234);

        let result = use_case(&store)
            .execute(
                user.id,
                UpdateProfileInput {
                    email: Some(long_email),
                    ..Default::default()
                },
            )
            .await;

        match result {
            Err(UpdateProfileError::Validation(errors)) => {
                assert_eq!(errors[0].message, "Email cannot exceed 233 characters")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
