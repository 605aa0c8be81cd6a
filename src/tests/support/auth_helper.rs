use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::application::domain::entities::{Account, Role};
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::user_repository::CreateUserData;
use crate::auth::application::ports::outgoing::UserRepository;
use crate::tests::support::in_memory::InMemoryStore;

/// Argon2 with the smallest allowed cost so hashing tests stay fast.
pub fn fast_hasher() -> Argon2Hasher {
    Argon2Hasher::with_params(1024, 1, 1).expect("valid argon2 params")
}

pub fn test_token_provider() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "job-board-test".to_string(),
        access_token_expiry: 3600,
    })
}

/// Registers an account straight through the repository, with a real hash.
pub async fn seed_user(store: &InMemoryStore, email: &str, password: &str, role: Role) -> Account {
    let password_hash = fast_hasher()
        .hash_password(password)
        .await
        .expect("hash password");
    let name = email.split('@').next().unwrap_or(email).to_string();

    store
        .create_user(CreateUserData {
            name,
            email: email.to_string(),
            password_hash,
            role,
        })
        .await
        .expect("seed user")
}
