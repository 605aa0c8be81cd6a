use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::job::application::domain::entities::Job;
use crate::user::application::ports::incoming::use_cases::{
    ListFavoritesError, ListFavoritesUseCase,
};
use crate::user::application::ports::outgoing::UserConsoleQuery;

pub struct ListFavoritesService<Q>
where
    Q: UserConsoleQuery,
{
    query: Q,
}

impl<Q> ListFavoritesService<Q>
where
    Q: UserConsoleQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListFavoritesUseCase for ListFavoritesService<Q>
where
    Q: UserConsoleQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<Vec<Job>, ListFavoritesError> {
        Ok(self.query.favorite_jobs(user_id, Utc::now(), None).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::sample_job;
    use crate::tests::support::in_memory::InMemoryStore;

    #[tokio::test]
    async fn hides_favorites_that_are_no_longer_live() {
        let store = InMemoryStore::default();
        let user = Uuid::new_v4();

        let live = sample_job(None);
        let mut closed = sample_job(None);
        closed.is_active = false;
        store.insert_job(live.clone());
        store.insert_job(closed.clone());

        store.add_favorite_direct(user, live.id);
        store.add_favorite_direct(user, closed.id);
        // Favorite of a posting that never existed.
        store.add_favorite_direct(user, Uuid::new_v4());

        let favorites = ListFavoritesService::new(store).execute(user).await.unwrap();

        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, live.id);
    }
}
