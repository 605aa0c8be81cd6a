use async_trait::async_trait;

use crate::auth::application::domain::entities::Account;
use crate::user::application::domain::entities::UserDashboard;
use crate::user::application::ports::outgoing::UserConsoleQueryError;

pub const RECENT_APPLICATIONS_LIMIT: usize = 5;
pub const DASHBOARD_FAVORITES_LIMIT: u64 = 5;
pub const RECOMMENDED_JOBS_LIMIT: u64 = 10;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserDashboardError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<UserConsoleQueryError> for UserDashboardError {
    fn from(err: UserConsoleQueryError) -> Self {
        match err {
            UserConsoleQueryError::DatabaseError(msg)
            | UserConsoleQueryError::SerializationError(msg) => UserDashboardError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait UserDashboardUseCase: Send + Sync {
    /// Takes the authenticated account so profile and preferences need no
    /// second lookup.
    async fn execute(&self, account: &Account) -> Result<UserDashboard, UserDashboardError>;
}
