use async_trait::async_trait;
use uuid::Uuid;

use crate::job::application::domain::entities::Job;
use crate::user::application::ports::outgoing::UserConsoleQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListFavoritesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<UserConsoleQueryError> for ListFavoritesError {
    fn from(err: UserConsoleQueryError) -> Self {
        match err {
            UserConsoleQueryError::DatabaseError(msg)
            | UserConsoleQueryError::SerializationError(msg) => ListFavoritesError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait ListFavoritesUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<Vec<Job>, ListFavoritesError>;
}
