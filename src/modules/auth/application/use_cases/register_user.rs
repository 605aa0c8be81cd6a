use std::sync::Arc;

use async_trait::async_trait;

use super::AuthSession;
use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::ports::outgoing::user_repository::CreateUserData;
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository, UserRepositoryError};
use crate::shared::validation::{non_blank, normalize_email, FieldError};

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_NAME_LENGTH: usize = 50;

#[derive(Debug, Clone, Default)]
pub struct RegisterUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Invalid registration data")]
    Validation(Vec<FieldError>),

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

struct ValidRegistration {
    name: String,
    email: String,
    password: String,
    role: Role,
}

fn validate(input: RegisterUserInput) -> Result<ValidRegistration, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = non_blank(input.name.as_deref());
    match &name {
        None => errors.push(FieldError::new("name", "Name is required")),
        Some(n) if n.chars().count() > MAX_NAME_LENGTH => errors.push(FieldError::new(
            "name",
            "Name cannot exceed 50 characters",
        )),
        _ => {}
    }

    let email = match input.email.as_deref().map(normalize_email) {
        Some(Ok(email)) => Some(email),
        Some(Err(error)) => {
            errors.push(error);
            None
        }
        None => {
            errors.push(FieldError::new("email", "Invalid email"));
            None
        }
    };

    let password = input.password.unwrap_or_default();
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }

    let role = match non_blank(input.role.as_deref()) {
        None => Some(Role::User),
        Some(raw) => match raw.parse::<Role>() {
            Ok(role) if role.is_self_assignable() => Some(role),
            _ => {
                errors.push(FieldError::new("role", "Role must be 'user' or 'company'"));
                None
            }
        },
    };

    match (name, email, role) {
        (Some(name), Some(email), Some(role)) if errors.is_empty() => Ok(ValidRegistration {
            name,
            email,
            password,
            role,
        }),
        _ => Err(errors),
    }
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput) -> Result<AuthSession, RegisterUserError>;
}

pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: RegisterUserInput) -> Result<AuthSession, RegisterUserError> {
        let valid = validate(input).map_err(RegisterUserError::Validation)?;

        let existing = self
            .query
            .find_by_email(&valid.email)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&valid.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // The unique index still guards against a concurrent registration.
        let account = self
            .repository
            .create_user(CreateUserData {
                name: valid.name,
                email: valid.email,
                password_hash,
                role: valid.role,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        let token = self
            .token_provider
            .generate_access_token(account.id)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        Ok(AuthSession { token, account })
    }
}
