use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Postings without an explicit expiry stay live this long.
pub const DEFAULT_POSTING_LIFETIME_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

// ──────────────────────────────────────────────────────────
// Closed vocabularies
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Internship,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Freelance => "freelance",
            JobType::Internship => "internship",
        }
    }
}

impl FromStr for JobType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full-time" => Ok(JobType::FullTime),
            "part-time" => Ok(JobType::PartTime),
            "contract" => Ok(JobType::Contract),
            "freelance" => Ok(JobType::Freelance),
            "internship" => Ok(JobType::Internship),
            _ => Err(UnknownVariant::new("job type", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobLevel {
    Entry,
    Junior,
    Mid,
    Senior,
    Lead,
    Executive,
}

impl JobLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobLevel::Entry => "entry",
            JobLevel::Junior => "junior",
            JobLevel::Mid => "mid",
            JobLevel::Senior => "senior",
            JobLevel::Lead => "lead",
            JobLevel::Executive => "executive",
        }
    }
}

impl FromStr for JobLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "entry" => Ok(JobLevel::Entry),
            "junior" => Ok(JobLevel::Junior),
            "mid" => Ok(JobLevel::Mid),
            "senior" => Ok(JobLevel::Senior),
            "lead" => Ok(JobLevel::Lead),
            "executive" => Ok(JobLevel::Executive),
            _ => Err(UnknownVariant::new("job level", s)),
        }
    }
}

/// Where a posting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSource {
    Internal,
    Jobicy,
    Remotive,
    Manual,
}

impl JobSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobSource::Internal => "internal",
            JobSource::Jobicy => "jobicy",
            JobSource::Remotive => "remotive",
            JobSource::Manual => "manual",
        }
    }
}

impl FromStr for JobSource {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "internal" => Ok(JobSource::Internal),
            "jobicy" => Ok(JobSource::Jobicy),
            "remotive" => Ok(JobSource::Remotive),
            "manual" => Ok(JobSource::Manual),
            _ => Err(UnknownVariant::new("job source", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Viewed,
    Interview,
    Rejected,
    Accepted,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Viewed => "viewed",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Accepted => "accepted",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "applied" => Ok(ApplicationStatus::Applied),
            "viewed" => Ok(ApplicationStatus::Viewed),
            "interview" => Ok(ApplicationStatus::Interview),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "accepted" => Ok(ApplicationStatus::Accepted),
            _ => Err(UnknownVariant::new("application status", s)),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(JobType, JobLevel, JobSource, ApplicationStatus);

// ──────────────────────────────────────────────────────────
// Posting
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salary {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub currency: String,
}

/// A stored posting. Applications live in their own table and are never
/// part of this record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub company_logo: Option<String>,
    pub job_description: String,
    pub job_excerpt: Option<String>,
    pub job_tags: Vec<String>,
    pub job_type: JobType,
    pub job_level: JobLevel,
    pub job_geo: String,
    pub is_remote: bool,
    pub salary: Option<Salary>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub url: String,
    pub application_url: Option<String>,
    pub job_industry: Option<String>,
    pub company_size: Option<String>,
    pub source: JobSource,
    pub is_external: bool,
    pub external_id: Option<String>,
    #[serde(skip_serializing)]
    pub posted_by: Option<Uuid>,
    pub views: i64,
    pub clicks: i64,
    pub expires_at: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Publicly listable: active and not yet expired.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.expires_at > now
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.posted_by == Some(user_id)
    }
}

pub fn default_expiry(created_at: DateTime<Utc>) -> DateTime<Utc> {
    created_at + Duration::days(DEFAULT_POSTING_LIFETIME_DAYS)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostedBy {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Single posting with its owner resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDetail {
    pub job: Job,
    pub posted_by: Option<PostedBy>,
}

/// Validated input for a company-created posting.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub job_title: String,
    pub company_name: String,
    pub company_logo: Option<String>,
    pub job_description: String,
    pub job_excerpt: Option<String>,
    pub job_tags: Vec<String>,
    pub job_type: JobType,
    pub job_level: JobLevel,
    pub job_geo: String,
    pub is_remote: bool,
    pub salary: Option<Salary>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub url: String,
    pub application_url: Option<String>,
    pub job_industry: Option<String>,
    pub company_size: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub posted_by: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub job_id: Uuid,
    pub user_id: Uuid,
    pub resume: Option<String>,
    pub cover_letter: Option<String>,
}

// ──────────────────────────────────────────────────────────
// Listing filters
// ──────────────────────────────────────────────────────────

/// Conjunctive filters over live postings. Text filters are
/// case-insensitive substring matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilters {
    pub search: Option<String>,
    pub technology: Option<String>,
    pub location: Option<String>,
    pub level: Option<JobLevel>,
    pub job_type: Option<JobType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationFilter<'a> {
    RemoteOnly,
    Geo(&'a str),
}

impl JobFilters {
    /// The literal location `remote` selects remote postings instead of
    /// matching the geography text.
    pub fn location_filter(&self) -> Option<LocationFilter<'_>> {
        let location = self
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())?;

        if location.eq_ignore_ascii_case("remote") {
            Some(LocationFilter::RemoteOnly)
        } else {
            Some(LocationFilter::Geo(location))
        }
    }
}

/// `%term%` for ILIKE, with LIKE wildcards in the term escaped.
pub fn like_pattern(term: &str) -> String {
    let escaped = term
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

// ──────────────────────────────────────────────────────────
// Third-party postings
// ──────────────────────────────────────────────────────────

/// A posting normalized from the remote-jobs API. Never persisted by the
/// request path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalJob {
    pub external_id: String,
    pub job_title: String,
    pub company_name: String,
    pub company_logo: Option<String>,
    pub job_excerpt: Option<String>,
    pub job_description: Option<String>,
    pub job_tags: Vec<String>,
    pub job_type: JobType,
    pub job_level: JobLevel,
    pub job_geo: String,
    pub url: String,
    pub job_industry: Option<String>,
    pub source: JobSource,
    pub is_external: bool,
    pub source_tech: String,
}

/// Entry of the random-jobs feed: either straight from the gateway or a
/// local posting used as backfill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RandomJob {
    External(ExternalJob),
    Local(Job),
}
