use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Account;
use crate::auth::application::ports::outgoing::user_activity_query::UserActivity;
use crate::auth::application::ports::outgoing::{UserActivityQuery, UserQuery};

#[derive(Debug, Clone)]
pub struct ProfileView {
    pub account: Account,
    pub activity: UserActivity,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<ProfileView, FetchProfileError>;
}

pub struct FetchProfileUseCase<Q, A>
where
    Q: UserQuery + Send + Sync,
    A: UserActivityQuery + Send + Sync,
{
    query: Q,
    activity: A,
}

impl<Q, A> FetchProfileUseCase<Q, A>
where
    Q: UserQuery + Send + Sync,
    A: UserActivityQuery + Send + Sync,
{
    pub fn new(query: Q, activity: A) -> Self {
        Self { query, activity }
    }
}

#[async_trait]
impl<Q, A> IFetchProfileUseCase for FetchProfileUseCase<Q, A>
where
    Q: UserQuery + Send + Sync,
    A: UserActivityQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<ProfileView, FetchProfileError> {
        let account = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchProfileError::QueryError(e.to_string()))?
            .ok_or(FetchProfileError::UserNotFound)?
            .into_account();

        let activity = self
            .activity
            .activity_for(user_id)
            .await
            .map_err(|e| FetchProfileError::QueryError(e.to_string()))?;

        Ok(ProfileView { account, activity })
    }
}
