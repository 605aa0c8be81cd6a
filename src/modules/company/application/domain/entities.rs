use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, UserProfile};
use crate::job::application::domain::entities::{
    ApplicationStatus, Job, JobLevel, JobType, Salary,
};

/// Postings a console caller may read and change. Console reads and edits
/// always use `Owner`; only deactivation lets an admin reach any posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerScope {
    Owner(Uuid),
    Any,
}

impl OwnerScope {
    pub fn for_deactivation(user_id: Uuid, role: Role) -> Self {
        if role.bypasses_ownership() {
            OwnerScope::Any
        } else {
            OwnerScope::Owner(user_id)
        }
    }

    pub fn owner_id(&self) -> Option<Uuid> {
        match self {
            OwnerScope::Owner(id) => Some(*id),
            OwnerScope::Any => None,
        }
    }

    pub fn covers(&self, job: &Job) -> bool {
        match self {
            OwnerScope::Owner(id) => job.is_owned_by(*id),
            OwnerScope::Any => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicant {
    pub user: ApplicantSummary,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// An owned posting with its applications, newest application first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyJob {
    #[serde(flatten)]
    pub job: Job,
    pub applications: Vec<JobApplicant>,
}

/// Totals over every posting in scope, active or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStats {
    pub total_jobs: u64,
    pub active_jobs: u64,
    pub total_views: i64,
    pub total_clicks: i64,
    pub total_applications: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub profile: UserProfile,
}

/// One row of the cross-posting applicant list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantEntry {
    pub job_id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub applicant: ApplicantProfile,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopJob {
    pub id: Uuid,
    pub job_title: String,
    pub views: i64,
    pub clicks: i64,
    #[serde(rename = "applicationCount")]
    pub applications: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentApplicant {
    pub job_id: Uuid,
    pub job_title: String,
    pub applicant: ApplicantSummary,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDashboard {
    pub stats: CompanyStats,
    pub top_jobs: Vec<TopJob>,
    pub recent_applications: Vec<RecentApplicant>,
}

/// Validated partial update of a posting. `None` keeps the stored value;
/// owner, source and counters are never part of a patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPatch {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub job_description: Option<String>,
    pub job_excerpt: Option<String>,
    pub job_tags: Option<Vec<String>>,
    pub job_type: Option<JobType>,
    pub job_level: Option<JobLevel>,
    pub job_geo: Option<String>,
    pub is_remote: Option<bool>,
    pub salary: Option<Salary>,
    pub requirements: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
    pub url: Option<String>,
    pub application_url: Option<String>,
    pub job_industry: Option<String>,
    pub company_size: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

impl JobPatch {
    pub fn is_empty(&self) -> bool {
        *self == JobPatch::default()
    }

    pub fn apply_to(&self, job: &mut Job) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *target = v.clone();
            }
        }
        fn set_opt<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
            if value.is_some() {
                *target = value.clone();
            }
        }

        set(&mut job.job_title, &self.job_title);
        set(&mut job.company_name, &self.company_name);
        set_opt(&mut job.company_logo, &self.company_logo);
        set(&mut job.job_description, &self.job_description);
        set_opt(&mut job.job_excerpt, &self.job_excerpt);
        set(&mut job.job_tags, &self.job_tags);
        set(&mut job.job_type, &self.job_type);
        set(&mut job.job_level, &self.job_level);
        set(&mut job.job_geo, &self.job_geo);
        set(&mut job.is_remote, &self.is_remote);
        set_opt(&mut job.salary, &self.salary);
        set(&mut job.requirements, &self.requirements);
        set(&mut job.benefits, &self.benefits);
        set(&mut job.url, &self.url);
        set_opt(&mut job.application_url, &self.application_url);
        set_opt(&mut job.job_industry, &self.job_industry);
        set_opt(&mut job.company_size, &self.company_size);
        set(&mut job.expires_at, &self.expires_at);
        set(&mut job.is_active, &self.is_active);
    }
}
