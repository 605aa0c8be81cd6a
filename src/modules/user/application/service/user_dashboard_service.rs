use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::Account;
use crate::user::application::domain::entities::{
    profile_completeness, DashboardStats, UserDashboard,
};
use crate::user::application::ports::incoming::use_cases::{
    UserDashboardError, UserDashboardUseCase, DASHBOARD_FAVORITES_LIMIT,
    RECENT_APPLICATIONS_LIMIT, RECOMMENDED_JOBS_LIMIT,
};
use crate::user::application::ports::outgoing::UserConsoleQuery;

pub struct UserDashboardService<Q>
where
    Q: UserConsoleQuery,
{
    query: Q,
}

impl<Q> UserDashboardService<Q>
where
    Q: UserConsoleQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> UserDashboardUseCase for UserDashboardService<Q>
where
    Q: UserConsoleQuery + Send + Sync,
{
    async fn execute(&self, account: &Account) -> Result<UserDashboard, UserDashboardError> {
        let now = Utc::now();
        let technologies: Vec<String> = account
            .preferences
            .technologies
            .iter()
            .filter(|t| !t.trim().is_empty())
            .cloned()
            .collect();

        let (counts, mut recent_applications, favorite_jobs, recommended_jobs) = futures::try_join!(
            self.query.counts(account.id, now),
            self.query.applications(account.id, now),
            self.query
                .favorite_jobs(account.id, now, Some(DASHBOARD_FAVORITES_LIMIT)),
            self.query
                .recommended_jobs(account.id, &technologies, now, RECOMMENDED_JOBS_LIMIT),
        )?;
        recent_applications.truncate(RECENT_APPLICATIONS_LIMIT);

        Ok(UserDashboard {
            stats: DashboardStats {
                total_applications: counts.applications,
                total_favorites: counts.favorites,
                profile_completeness: profile_completeness(account),
            },
            recent_applications,
            favorite_jobs,
            recommended_jobs,
        })
    }
}
