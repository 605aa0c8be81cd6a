use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::job::application::domain::entities::Job;
use crate::user::application::domain::entities::{ConsoleCounts, UserApplication};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserConsoleQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Read views over a user's applications and favorites. Every list only
/// carries postings that are live at `now`.
#[async_trait]
pub trait UserConsoleQuery: Send + Sync {
    /// Newest application first.
    async fn applications(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<UserApplication>, UserConsoleQueryError>;

    /// Most recently favorited first; `None` returns all of them.
    async fn favorite_jobs(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
        limit: Option<u64>,
    ) -> Result<Vec<Job>, UserConsoleQueryError>;

    async fn counts(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<ConsoleCounts, UserConsoleQueryError>;

    /// Newest live postings the user has not applied to. With technologies,
    /// only postings with a tag containing one of them (case-insensitive).
    async fn recommended_jobs(
        &self,
        user_id: Uuid,
        technologies: &[String],
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Job>, UserConsoleQueryError>;
}
