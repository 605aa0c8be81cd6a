use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::user::application::domain::entities::UserApplication;
use crate::user::application::ports::incoming::use_cases::{
    ListApplicationsError, ListApplicationsUseCase,
};
use crate::user::application::ports::outgoing::UserConsoleQuery;

pub struct ListApplicationsService<Q>
where
    Q: UserConsoleQuery,
{
    query: Q,
}

impl<Q> ListApplicationsService<Q>
where
    Q: UserConsoleQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListApplicationsUseCase for ListApplicationsService<Q>
where
    Q: UserConsoleQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<Vec<UserApplication>, ListApplicationsError> {
        Ok(self.query.applications(user_id, Utc::now()).await?)
    }
}
