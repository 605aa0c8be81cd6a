use chrono::{Duration, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::job::adapter::outgoing::sea_orm_entity::jobs;
use crate::job::application::domain::entities::{
    default_expiry, ExternalJob, Job, JobLevel, JobSource, JobType,
};

/// Syntactically valid email of exactly `len` characters (`len >= 70`):
/// a 64-char local part and a domain split into 49-char labels.
pub fn email_of_length(len: usize) -> String {
    let body = len - "@".len() - 64 - ".com".len();
    let domain: String = (0..body)
        .map(|i| if i % 50 == 49 && i != body - 1 { '.' } else { 'b' })
        .collect();
    format!("{}@{domain}.com", "a".repeat(64))
}

/// A live internal posting tagged `rust`.
pub fn sample_job(posted_by: Option<Uuid>) -> Job {
    let now = Utc::now();
    Job {
        id: Uuid::new_v4(),
        job_title: "Rust Engineer".into(),
        company_name: "Acme".into(),
        company_logo: None,
        job_description: "Build services in Rust.".into(),
        job_excerpt: None,
        job_tags: vec!["rust".into()],
        job_type: JobType::FullTime,
        job_level: JobLevel::Mid,
        job_geo: "Remote".into(),
        is_remote: true,
        salary: None,
        requirements: Vec::new(),
        benefits: Vec::new(),
        url: "https://acme.io/jobs/rust".into(),
        application_url: None,
        job_industry: None,
        company_size: None,
        source: JobSource::Internal,
        is_external: false,
        external_id: None,
        posted_by,
        views: 0,
        clicks: 0,
        expires_at: default_expiry(now),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_external_job(technology: &str) -> ExternalJob {
    ExternalJob {
        external_id: Uuid::new_v4().to_string(),
        job_title: format!("{technology} developer"),
        company_name: "Remote Co".into(),
        company_logo: None,
        job_excerpt: Some("Fully remote".into()),
        job_description: None,
        job_tags: vec![technology.to_string()],
        job_type: JobType::FullTime,
        job_level: JobLevel::Mid,
        job_geo: "Anywhere".into(),
        url: "https://jobicy.com/jobs/1".into(),
        job_industry: None,
        source: JobSource::Jobicy,
        is_external: true,
        source_tech: technology.to_string(),
    }
}

/// Row form of [`sample_job`].
pub fn job_model(posted_by: Option<Uuid>) -> jobs::Model {
    let now = Utc::now().fixed_offset();
    jobs::Model {
        id: Uuid::new_v4(),
        job_title: "Rust Engineer".into(),
        company_name: "Acme".into(),
        company_logo: None,
        job_description: "Build services in Rust.".into(),
        job_excerpt: None,
        job_tags: json!(["rust"]),
        job_type: "full-time".into(),
        job_level: "mid".into(),
        job_geo: "Remote".into(),
        is_remote: true,
        salary_min: None,
        salary_max: None,
        salary_currency: "USD".into(),
        requirements: json!([]),
        benefits: json!([]),
        url: "https://acme.io/jobs/rust".into(),
        application_url: None,
        job_industry: None,
        company_size: None,
        source: "internal".into(),
        is_external: false,
        external_id: None,
        posted_by,
        views: 0,
        clicks: 0,
        expires_at: now + Duration::days(30),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn user_model(email: &str) -> users::Model {
    let now = Utc::now().fixed_offset();
    users::Model {
        id: Uuid::new_v4(),
        name: "Ana".into(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=1024,t=1,p=1$c2FsdA$aGFzaA".into(),
        role: "user".into(),
        profile: json!({ "phone": "+351 900 000 000", "skills": ["rust"] }),
        preferences: json!({}),
        is_active: true,
        email_verified: false,
        password_reset_token: None,
        password_reset_expires: None,
        last_login: None,
        created_at: now,
        updated_at: now,
    }
}
