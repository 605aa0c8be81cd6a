use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Stored password hash is unreadable")]
    VerifyFailed,

    #[error("Background task failed")]
    TaskFailed,
}

/// Hashing is CPU-bound; implementations must not block the async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;
    /// `Ok(false)` on mismatch; `Err` only when the check itself could not run.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
