use async_trait::async_trait;
use uuid::Uuid;

use crate::user::application::domain::entities::UserApplication;
use crate::user::application::ports::outgoing::UserConsoleQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListApplicationsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<UserConsoleQueryError> for ListApplicationsError {
    fn from(err: UserConsoleQueryError) -> Self {
        match err {
            UserConsoleQueryError::DatabaseError(msg)
            | UserConsoleQueryError::SerializationError(msg) => {
                ListApplicationsError::QueryFailed(msg)
            }
        }
    }
}

#[async_trait]
pub trait ListApplicationsUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<Vec<UserApplication>, ListApplicationsError>;
}
