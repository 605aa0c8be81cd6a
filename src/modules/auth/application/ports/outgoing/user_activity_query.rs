use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One line of the "me" endpoint's application history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub job_id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteSummary {
    pub job_id: Uuid,
    /// `None` when the favorited posting no longer exists.
    pub job_title: Option<String>,
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserActivity {
    pub applications: Vec<ApplicationSummary>,
    pub favorite_jobs: Vec<FavoriteSummary>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserActivityQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserActivityQuery: Send + Sync {
    async fn activity_for(&self, user_id: Uuid) -> Result<UserActivity, UserActivityQueryError>;
}
