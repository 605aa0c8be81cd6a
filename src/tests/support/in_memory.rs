use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Account, UserPreferences, UserProfile};
use crate::auth::application::ports::outgoing::user_activity_query::{
    ApplicationSummary, FavoriteSummary, UserActivity, UserActivityQueryError,
};
use crate::auth::application::ports::outgoing::user_query::{UserQueryError, UserQueryResult};
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, ProfileChanges,
};
use crate::auth::application::ports::outgoing::{
    UserActivityQuery, UserQuery, UserRepository, UserRepositoryError,
};
use crate::company::application::domain::entities::{
    ApplicantEntry, ApplicantProfile, ApplicantSummary, CompanyJob, CompanyStats, JobApplicant,
    JobPatch, OwnerScope, RecentApplicant, TopJob,
};
use crate::company::application::ports::outgoing::{
    CompanyJobQuery, CompanyJobRepository, CompanyQueryError, CompanyRepositoryError,
};
use crate::job::application::domain::entities::{
    default_expiry, ApplicationStatus, Job, JobDetail, JobFilters, JobSource, LocationFilter,
    NewApplication, NewJob, PostedBy,
};
use crate::job::application::ports::outgoing::{
    ApplicationRepository, ApplicationRepositoryError, FavoriteRepository,
    FavoriteRepositoryError, JobQuery, JobQueryError, JobRepository, JobRepositoryError,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::user::application::domain::entities::{
    ApplicationJobSummary, ConsoleCounts, UserApplication,
};
use crate::user::application::ports::outgoing::{UserConsoleQuery, UserConsoleQueryError};

#[derive(Debug, Clone)]
struct ApplicationRow {
    job_id: Uuid,
    user_id: Uuid,
    status: ApplicationStatus,
    resume: Option<String>,
    cover_letter: Option<String>,
    applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct FavoriteRow {
    user_id: Uuid,
    job_id: Uuid,
}

#[derive(Default)]
struct State {
    users: Vec<UserQueryResult>,
    jobs: Vec<Job>,
    applications: Vec<ApplicationRow>,
    /// Insertion order doubles as favorited-at order.
    favorites: Vec<FavoriteRow>,
}

impl State {
    fn user(&self, id: Uuid) -> Option<&UserQueryResult> {
        self.users.iter().find(|u| u.id == id)
    }

    fn user_mut(&mut self, id: Uuid) -> Result<&mut UserQueryResult, UserRepositoryError> {
        self.users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(UserRepositoryError::UserNotFound)
    }

    fn email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
        self.users
            .iter()
            .any(|u| Some(u.id) != except && u.email.eq_ignore_ascii_case(email))
    }

    fn job(&self, id: Uuid) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    fn scoped_jobs(&self, scope: OwnerScope) -> Vec<&Job> {
        self.jobs.iter().filter(|j| scope.covers(j)).collect()
    }

    /// Applications on postings in scope whose applicant still exists,
    /// newest first.
    fn scoped_applications(
        &self,
        scope: OwnerScope,
    ) -> Vec<(&ApplicationRow, &Job, &UserQueryResult)> {
        let mut rows: Vec<_> = self
            .applications
            .iter()
            .filter_map(|a| {
                let job = self.job(a.job_id).filter(|j| scope.covers(j))?;
                let user = self.user(a.user_id)?;
                Some((a, job, user))
            })
            .collect();
        rows.sort_by(|a, b| b.0.applied_at.cmp(&a.0.applied_at));
        rows
    }
}

fn newest_first(jobs: &mut [Job]) {
    jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack
        .to_lowercase()
        .contains(needle.trim().to_lowercase().as_str())
}

fn matches_filters(job: &Job, filters: &JobFilters) -> bool {
    if let Some(search) = &filters.search {
        if !(contains_ci(&job.job_title, search)
            || contains_ci(&job.company_name, search)
            || contains_ci(&job.job_description, search))
        {
            return false;
        }
    }
    if let Some(technology) = &filters.technology {
        if !job.job_tags.iter().any(|t| contains_ci(t, technology)) {
            return false;
        }
    }
    match filters.location_filter() {
        Some(LocationFilter::RemoteOnly) if !job.is_remote => return false,
        Some(LocationFilter::Geo(geo)) if !contains_ci(&job.job_geo, geo) => return false,
        _ => {}
    }
    if filters.level.is_some_and(|level| job.job_level != level) {
        return false;
    }
    if filters.job_type.is_some_and(|t| job.job_type != t) {
        return false;
    }
    true
}

fn page_of<T: Clone>(items: &[T], page: PageRequest) -> Vec<T> {
    items
        .iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .cloned()
        .collect()
}

fn applicant_summary(user: &UserQueryResult) -> ApplicantSummary {
    ApplicantSummary {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        phone: user.profile.phone.clone(),
    }
}

/// Single store behind every outgoing port, so service tests can wire one
/// value into several slots and observe the combined effect.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn user(&self, id: Uuid) -> Option<UserQueryResult> {
        self.lock().user(id).cloned()
    }

    pub fn insert_job(&self, job: Job) {
        self.lock().jobs.push(job);
    }

    pub fn job(&self, id: Uuid) -> Option<Job> {
        self.lock().job(id).cloned()
    }

    pub fn application_status(&self, job_id: Uuid, user_id: Uuid) -> Option<ApplicationStatus> {
        self.lock()
            .applications
            .iter()
            .find(|a| a.job_id == job_id && a.user_id == user_id)
            .map(|a| a.status)
    }

    pub fn application_count(&self, job_id: Uuid) -> usize {
        self.lock()
            .applications
            .iter()
            .filter(|a| a.job_id == job_id)
            .count()
    }

    pub fn insert_application(
        &self,
        job_id: Uuid,
        user_id: Uuid,
        status: ApplicationStatus,
        applied_at: DateTime<Utc>,
    ) {
        self.lock().applications.push(ApplicationRow {
            job_id,
            user_id,
            status,
            resume: None,
            cover_letter: None,
            applied_at,
        });
    }

    /// Bypasses the toggle logic; the job does not have to exist.
    pub fn add_favorite_direct(&self, user_id: Uuid, job_id: Uuid) {
        self.lock().favorites.push(FavoriteRow { user_id, job_id });
    }

    /// Favorited job ids in the order they were added.
    pub fn favorites_of(&self, user_id: Uuid) -> Vec<Uuid> {
        self.lock()
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .map(|f| f.job_id)
            .collect()
    }
}

// ──────────────────────────────────────────────────────────
// auth ports
// ──────────────────────────────────────────────────────────

#[async_trait]
impl UserQuery for InMemoryStore {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self.user(user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_user(&self, data: CreateUserData) -> Result<Account, UserRepositoryError> {
        let mut state = self.lock();
        if state.email_taken(&data.email, None) {
            return Err(UserRepositoryError::EmailAlreadyExists);
        }

        let now = Utc::now();
        let user = UserQueryResult {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            password_hash: data.password_hash,
            role: data.role,
            profile: UserProfile::default(),
            preferences: UserPreferences::default(),
            is_active: true,
            email_verified: false,
            last_login: None,
            created_at: now,
            updated_at: now,
        };
        state.users.push(user.clone());

        Ok(user.into_account())
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Account, UserRepositoryError> {
        let mut state = self.lock();
        if let Some(email) = &changes.email {
            if state.email_taken(email, Some(user_id)) {
                return Err(UserRepositoryError::EmailAlreadyExists);
            }
        }

        let user = state.user_mut(user_id)?;
        if !changes.is_empty() {
            if let Some(name) = changes.name {
                user.name = name;
            }
            if let Some(email) = changes.email {
                user.email = email;
            }
            if let Some(profile) = changes.profile {
                user.profile = profile;
            }
            user.updated_at = Utc::now();
        }

        Ok(user.clone().into_account())
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        self.lock().user_mut(user_id)?.password_hash = new_password_hash;
        Ok(())
    }

    async fn record_login(
        &self,
        user_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        self.lock().user_mut(user_id)?.last_login = Some(at);
        Ok(())
    }

    async fn update_preferences(
        &self,
        user_id: Uuid,
        preferences: UserPreferences,
    ) -> Result<UserPreferences, UserRepositoryError> {
        self.lock().user_mut(user_id)?.preferences = preferences.clone();
        Ok(preferences)
    }

    async fn deactivate(
        &self,
        user_id: Uuid,
        replacement_email: String,
    ) -> Result<(), UserRepositoryError> {
        let mut state = self.lock();
        let user = state.user_mut(user_id)?;
        user.is_active = false;
        user.email = replacement_email;
        Ok(())
    }
}

#[async_trait]
impl UserActivityQuery for InMemoryStore {
    async fn activity_for(&self, user_id: Uuid) -> Result<UserActivity, UserActivityQueryError> {
        let state = self.lock();

        let mut applications: Vec<ApplicationSummary> = state
            .applications
            .iter()
            .filter(|a| a.user_id == user_id)
            .filter_map(|a| {
                let job = state.job(a.job_id)?;
                Some(ApplicationSummary {
                    job_id: a.job_id,
                    job_title: job.job_title.clone(),
                    company_name: job.company_name.clone(),
                    status: a.status.to_string(),
                    applied_at: a.applied_at,
                })
            })
            .collect();
        applications.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));

        let favorite_jobs = state
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .map(|f| {
                let job = state.job(f.job_id);
                FavoriteSummary {
                    job_id: f.job_id,
                    job_title: job.map(|j| j.job_title.clone()),
                    company_name: job.map(|j| j.company_name.clone()),
                }
            })
            .collect();

        Ok(UserActivity {
            applications,
            favorite_jobs,
        })
    }
}

// ──────────────────────────────────────────────────────────
// job ports
// ──────────────────────────────────────────────────────────

#[async_trait]
impl JobQuery for InMemoryStore {
    async fn list_live(
        &self,
        filters: &JobFilters,
        page: PageRequest,
        now: DateTime<Utc>,
    ) -> Result<PageResult<Job>, JobQueryError> {
        let mut live: Vec<Job> = self
            .lock()
            .jobs
            .iter()
            .filter(|j| j.is_live(now) && matches_filters(j, filters))
            .cloned()
            .collect();
        newest_first(&mut live);

        let total = live.len() as u64;
        Ok(PageResult::new(page_of(&live, page), page, total))
    }

    async fn find_detail(&self, job_id: Uuid) -> Result<Option<JobDetail>, JobQueryError> {
        let state = self.lock();
        Ok(state.job(job_id).map(|job| JobDetail {
            posted_by: job
                .posted_by
                .and_then(|owner| state.user(owner))
                .map(|owner| PostedBy {
                    id: owner.id,
                    name: owner.name.clone(),
                    email: owner.email.clone(),
                }),
            job: job.clone(),
        }))
    }

    async fn exists(&self, job_id: Uuid) -> Result<bool, JobQueryError> {
        Ok(self.lock().job(job_id).is_some())
    }
}

#[async_trait]
impl JobRepository for InMemoryStore {
    async fn create(&self, job: NewJob) -> Result<Job, JobRepositoryError> {
        let now = Utc::now();
        let created = Job {
            id: Uuid::new_v4(),
            job_title: job.job_title,
            company_name: job.company_name,
            company_logo: job.company_logo,
            job_description: job.job_description,
            job_excerpt: job.job_excerpt,
            job_tags: job.job_tags,
            job_type: job.job_type,
            job_level: job.job_level,
            job_geo: job.job_geo,
            is_remote: job.is_remote,
            salary: job.salary,
            requirements: job.requirements,
            benefits: job.benefits,
            url: job.url,
            application_url: job.application_url,
            job_industry: job.job_industry,
            company_size: job.company_size,
            source: JobSource::Internal,
            is_external: false,
            external_id: None,
            posted_by: Some(job.posted_by),
            views: 0,
            clicks: 0,
            expires_at: job.expires_at.unwrap_or_else(|| default_expiry(now)),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.insert_job(created.clone());
        Ok(created)
    }

    async fn increment_views(&self, job_id: Uuid) -> Result<(), JobRepositoryError> {
        let mut state = self.lock();
        let job = state
            .jobs
            .iter_mut()
            .find(|j| j.id == job_id)
            .ok_or(JobRepositoryError::NotFound)?;
        job.views += 1;
        Ok(())
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryStore {
    async fn has_applied(
        &self,
        job_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, ApplicationRepositoryError> {
        Ok(self.application_status(job_id, user_id).is_some())
    }

    async fn create(&self, application: NewApplication) -> Result<(), ApplicationRepositoryError> {
        let mut state = self.lock();
        if state
            .applications
            .iter()
            .any(|a| a.job_id == application.job_id && a.user_id == application.user_id)
        {
            return Err(ApplicationRepositoryError::AlreadyApplied);
        }

        state.applications.push(ApplicationRow {
            job_id: application.job_id,
            user_id: application.user_id,
            status: ApplicationStatus::Applied,
            resume: application.resume,
            cover_letter: application.cover_letter,
            applied_at: Utc::now(),
        });
        Ok(())
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryStore {
    async fn remove(&self, user_id: Uuid, job_id: Uuid) -> Result<bool, FavoriteRepositoryError> {
        let mut state = self.lock();
        let before = state.favorites.len();
        state
            .favorites
            .retain(|f| !(f.user_id == user_id && f.job_id == job_id));
        Ok(state.favorites.len() != before)
    }

    async fn add(&self, user_id: Uuid, job_id: Uuid) -> Result<(), FavoriteRepositoryError> {
        let mut state = self.lock();
        if !state
            .favorites
            .iter()
            .any(|f| f.user_id == user_id && f.job_id == job_id)
        {
            state.favorites.push(FavoriteRow { user_id, job_id });
        }
        Ok(())
    }
}

// ──────────────────────────────────────────────────────────
// company ports
// ──────────────────────────────────────────────────────────

#[async_trait]
impl CompanyJobQuery for InMemoryStore {
    async fn list_owned(
        &self,
        scope: OwnerScope,
        page: PageRequest,
    ) -> Result<PageResult<CompanyJob>, CompanyQueryError> {
        let state = self.lock();
        let mut owned: Vec<Job> = state.scoped_jobs(scope).into_iter().cloned().collect();
        newest_first(&mut owned);
        let total = owned.len() as u64;
        let applications = state.scoped_applications(scope);

        let items = page_of(&owned, page)
            .into_iter()
            .map(|job| CompanyJob {
                applications: applications
                    .iter()
                    .filter(|(a, _, _)| a.job_id == job.id)
                    .map(|(a, _, user)| JobApplicant {
                        user: applicant_summary(user),
                        status: a.status,
                        applied_at: a.applied_at,
                    })
                    .collect(),
                job,
            })
            .collect();

        Ok(PageResult::new(items, page, total))
    }

    async fn stats(&self, scope: OwnerScope) -> Result<CompanyStats, CompanyQueryError> {
        let state = self.lock();
        let jobs = state.scoped_jobs(scope);
        let total_applications = state
            .applications
            .iter()
            .filter(|a| state.job(a.job_id).is_some_and(|j| scope.covers(j)))
            .count() as u64;

        Ok(CompanyStats {
            total_jobs: jobs.len() as u64,
            active_jobs: jobs.iter().filter(|j| j.is_active).count() as u64,
            total_views: jobs.iter().map(|j| j.views).sum(),
            total_clicks: jobs.iter().map(|j| j.clicks).sum(),
            total_applications,
        })
    }

    async fn list_applicants(
        &self,
        scope: OwnerScope,
        status: Option<ApplicationStatus>,
        page: PageRequest,
    ) -> Result<PageResult<ApplicantEntry>, CompanyQueryError> {
        let state = self.lock();
        let entries: Vec<ApplicantEntry> = state
            .scoped_applications(scope)
            .into_iter()
            .filter(|(a, _, _)| status.map_or(true, |s| a.status == s))
            .map(|(a, job, user)| ApplicantEntry {
                job_id: job.id,
                job_title: job.job_title.clone(),
                company_name: job.company_name.clone(),
                applicant: ApplicantProfile {
                    id: user.id,
                    name: user.name.clone(),
                    email: user.email.clone(),
                    profile: user.profile.clone(),
                },
                status: a.status,
                applied_at: a.applied_at,
                resume: a.resume.clone(),
                cover_letter: a.cover_letter.clone(),
            })
            .collect();

        let total = entries.len() as u64;
        Ok(PageResult::new(page_of(&entries, page), page, total))
    }

    async fn top_jobs(
        &self,
        scope: OwnerScope,
        limit: u64,
    ) -> Result<Vec<TopJob>, CompanyQueryError> {
        let state = self.lock();
        let mut jobs = state.scoped_jobs(scope);
        jobs.sort_by(|a, b| {
            b.views
                .cmp(&a.views)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        Ok(jobs
            .into_iter()
            .take(limit as usize)
            .map(|job| TopJob {
                id: job.id,
                job_title: job.job_title.clone(),
                views: job.views,
                clicks: job.clicks,
                applications: state
                    .applications
                    .iter()
                    .filter(|a| a.job_id == job.id)
                    .count() as u64,
            })
            .collect())
    }

    async fn recent_applicants(
        &self,
        scope: OwnerScope,
        limit: u64,
    ) -> Result<Vec<RecentApplicant>, CompanyQueryError> {
        let state = self.lock();
        Ok(state
            .scoped_applications(scope)
            .into_iter()
            .take(limit as usize)
            .map(|(a, job, user)| RecentApplicant {
                job_id: job.id,
                job_title: job.job_title.clone(),
                applicant: applicant_summary(user),
                status: a.status,
                applied_at: a.applied_at,
            })
            .collect())
    }
}

#[async_trait]
impl CompanyJobRepository for InMemoryStore {
    async fn update_job(
        &self,
        scope: OwnerScope,
        job_id: Uuid,
        patch: JobPatch,
    ) -> Result<Job, CompanyRepositoryError> {
        let mut state = self.lock();
        let job = state
            .jobs
            .iter_mut()
            .find(|j| j.id == job_id && scope.covers(j))
            .ok_or(CompanyRepositoryError::JobNotFound)?;

        if !patch.is_empty() {
            patch.apply_to(job);
            job.updated_at = Utc::now();
        }
        Ok(job.clone())
    }

    async fn deactivate_job(
        &self,
        scope: OwnerScope,
        job_id: Uuid,
    ) -> Result<(), CompanyRepositoryError> {
        let mut state = self.lock();
        let job = state
            .jobs
            .iter_mut()
            .find(|j| j.id == job_id && scope.covers(j))
            .ok_or(CompanyRepositoryError::JobNotFound)?;
        job.is_active = false;
        job.updated_at = Utc::now();
        Ok(())
    }

    async fn update_application_status(
        &self,
        scope: OwnerScope,
        job_id: Uuid,
        user_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<(), CompanyRepositoryError> {
        let mut state = self.lock();
        if !state.job(job_id).is_some_and(|j| scope.covers(j)) {
            return Err(CompanyRepositoryError::JobNotFound);
        }

        let application = state
            .applications
            .iter_mut()
            .find(|a| a.job_id == job_id && a.user_id == user_id)
            .ok_or(CompanyRepositoryError::ApplicationNotFound)?;
        application.status = status;
        Ok(())
    }
}

// ──────────────────────────────────────────────────────────
// user console port
// ──────────────────────────────────────────────────────────

#[async_trait]
impl UserConsoleQuery for InMemoryStore {
    async fn applications(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<UserApplication>, UserConsoleQueryError> {
        let state = self.lock();
        let mut applications: Vec<UserApplication> = state
            .applications
            .iter()
            .filter(|a| a.user_id == user_id)
            .filter_map(|a| {
                let job = state.job(a.job_id).filter(|j| j.is_live(now))?;
                Some(UserApplication {
                    job_id: a.job_id,
                    status: a.status,
                    applied_at: a.applied_at,
                    job: ApplicationJobSummary {
                        job_title: job.job_title.clone(),
                        company_name: job.company_name.clone(),
                        job_geo: job.job_geo.clone(),
                        job_type: job.job_type,
                        job_level: job.job_level,
                        created_at: job.created_at,
                    },
                })
            })
            .collect();
        applications.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
        Ok(applications)
    }

    async fn favorite_jobs(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
        limit: Option<u64>,
    ) -> Result<Vec<Job>, UserConsoleQueryError> {
        let state = self.lock();
        let limit = limit.map_or(usize::MAX, |l| l as usize);
        Ok(state
            .favorites
            .iter()
            .rev()
            .filter(|f| f.user_id == user_id)
            .filter_map(|f| state.job(f.job_id).filter(|j| j.is_live(now)).cloned())
            .take(limit)
            .collect())
    }

    async fn counts(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<ConsoleCounts, UserConsoleQueryError> {
        let state = self.lock();
        Ok(ConsoleCounts {
            applications: state
                .applications
                .iter()
                .filter(|a| a.user_id == user_id)
                .count() as u64,
            favorites: state
                .favorites
                .iter()
                .filter(|f| f.user_id == user_id)
                .filter(|f| state.job(f.job_id).is_some_and(|j| j.is_live(now)))
                .count() as u64,
        })
    }

    async fn recommended_jobs(
        &self,
        user_id: Uuid,
        technologies: &[String],
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Job>, UserConsoleQueryError> {
        let state = self.lock();
        let mut jobs: Vec<Job> = state
            .jobs
            .iter()
            .filter(|j| j.is_live(now))
            .filter(|j| {
                !state
                    .applications
                    .iter()
                    .any(|a| a.job_id == j.id && a.user_id == user_id)
            })
            .filter(|j| {
                technologies.is_empty()
                    || technologies
                        .iter()
                        .any(|tech| j.job_tags.iter().any(|tag| contains_ci(tag, tech)))
            })
            .cloned()
            .collect();
        newest_first(&mut jobs);
        jobs.truncate(limit as usize);
        Ok(jobs)
    }
}
