use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::job::application::domain::entities::{
    default_expiry, Job, JobLevel, JobSource, JobType, NewJob, Salary,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub company_logo: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub job_description: String,
    pub job_excerpt: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub job_tags: Json,
    pub job_type: String,
    pub job_level: String,
    pub job_geo: String,
    pub is_remote: bool,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_currency: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub requirements: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub benefits: Json,
    pub url: String,
    pub application_url: Option<String>,
    pub job_industry: Option<String>,
    pub company_size: Option<String>,
    pub source: String,
    pub is_external: bool,
    pub external_id: Option<String>,
    pub posted_by: Option<Uuid>,
    pub views: i64,
    pub clicks: i64,
    pub expires_at: DateTimeWithTimeZone,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::job_applications::Entity")]
    Applications,
}

impl Related<super::job_applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

fn string_list(value: Json, column: &str) -> Result<Vec<String>, String> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(|e| format!("{column}: {e}"))
}

impl Model {
    /// Decodes enum and JSONB columns. A failure means the row was written
    /// outside this service.
    pub fn into_job(self) -> Result<Job, String> {
        let salary = match (self.salary_min, self.salary_max) {
            (None, None) => None,
            (min, max) => Some(Salary {
                min,
                max,
                currency: self.salary_currency,
            }),
        };

        Ok(Job {
            id: self.id,
            job_title: self.job_title,
            company_name: self.company_name,
            company_logo: self.company_logo,
            job_description: self.job_description,
            job_excerpt: self.job_excerpt,
            job_tags: string_list(self.job_tags, "job_tags")?,
            job_type: self.job_type.parse::<JobType>().map_err(|e| e.to_string())?,
            job_level: self.job_level.parse::<JobLevel>().map_err(|e| e.to_string())?,
            job_geo: self.job_geo,
            is_remote: self.is_remote,
            salary,
            requirements: string_list(self.requirements, "requirements")?,
            benefits: string_list(self.benefits, "benefits")?,
            url: self.url,
            application_url: self.application_url,
            job_industry: self.job_industry,
            company_size: self.company_size,
            source: self.source.parse::<JobSource>().map_err(|e| e.to_string())?,
            is_external: self.is_external,
            external_id: self.external_id,
            posted_by: self.posted_by,
            views: self.views,
            clicks: self.clicks,
            expires_at: self.expires_at.with_timezone(&chrono::Utc),
            is_active: self.is_active,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        })
    }
}

impl ActiveModel {
    /// Insert model for a company-created posting.
    pub fn from_new_job(job: NewJob, now: chrono::DateTime<chrono::Utc>) -> Self {
        let (salary_min, salary_max, salary_currency) = match job.salary {
            Some(s) => (s.min, s.max, s.currency),
            None => (None, None, "USD".to_string()),
        };
        let now_fixed = now.fixed_offset();

        ActiveModel {
            id: Set(Uuid::new_v4()),
            job_title: Set(job.job_title),
            company_name: Set(job.company_name),
            company_logo: Set(job.company_logo),
            job_description: Set(job.job_description),
            job_excerpt: Set(job.job_excerpt),
            job_tags: Set(serde_json::json!(job.job_tags)),
            job_type: Set(job.job_type.as_str().to_string()),
            job_level: Set(job.job_level.as_str().to_string()),
            job_geo: Set(job.job_geo),
            is_remote: Set(job.is_remote),
            salary_min: Set(salary_min),
            salary_max: Set(salary_max),
            salary_currency: Set(salary_currency),
            requirements: Set(serde_json::json!(job.requirements)),
            benefits: Set(serde_json::json!(job.benefits)),
            url: Set(job.url),
            application_url: Set(job.application_url),
            job_industry: Set(job.job_industry),
            company_size: Set(job.company_size),
            source: Set(JobSource::Internal.as_str().to_string()),
            is_external: Set(false),
            external_id: Set(None),
            posted_by: Set(Some(job.posted_by)),
            views: Set(0),
            clicks: Set(0),
            expires_at: Set(job.expires_at.unwrap_or_else(|| default_expiry(now)).fixed_offset()),
            is_active: Set(true),
            created_at: Set(now_fixed),
            updated_at: Set(now_fixed),
        }
    }
}
