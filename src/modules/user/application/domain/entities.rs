use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::Account;
use crate::job::application::domain::entities::{ApplicationStatus, Job, JobLevel, JobType};

/// Posting fields shown next to one of the caller's applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationJobSummary {
    pub job_title: String,
    pub company_name: String,
    pub job_geo: String,
    pub job_type: JobType,
    pub job_level: JobLevel,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserApplication {
    pub job_id: Uuid,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub job: ApplicationJobSummary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleCounts {
    /// Every application the user ever made.
    pub applications: u64,
    /// Favorites pointing at postings that are still live.
    pub favorites: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_applications: u64,
    pub total_favorites: u64,
    pub profile_completeness: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDashboard {
    pub stats: DashboardStats,
    pub recent_applications: Vec<UserApplication>,
    pub favorite_jobs: Vec<Job>,
    pub recommended_jobs: Vec<Job>,
}

const COMPLETENESS_FIELDS: u32 = 7;

fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Share of the checklist (name, email, phone, location, bio, skills,
/// experience) that is filled in, as a rounded percentage.
pub fn profile_completeness(account: &Account) -> u8 {
    let profile = &account.profile;
    let checks = [
        !account.name.trim().is_empty(),
        !account.email.trim().is_empty(),
        filled(&profile.phone),
        filled(&profile.location),
        filled(&profile.bio),
        !profile.skills.is_empty(),
        filled(&profile.experience),
    ];
    let completed = checks.iter().filter(|c| **c).count() as u32;

    ((completed * 100) as f64 / COMPLETENESS_FIELDS as f64).round() as u8
}

/// Email stored on a deactivated account so the address can register again.
pub fn deactivated_email(email: &str, at: DateTime<Utc>) -> String {
    format!("deleted_{}_{}", at.timestamp_millis(), email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Role, UserProfile};
    use crate::shared::validation::MAX_EMAIL_LENGTH;
    use crate::tests::support::fixtures::email_of_length;
    use crate::tests::support::stubs::sample_account;

    #[test]
    fn name_and_email_only_is_29_percent() {
        let mut account = sample_account(Role::User);
        account.profile = UserProfile::default();

        assert_eq!(profile_completeness(&account), 29);
    }

    #[test]
    fn full_profile_is_100_percent() {
        let mut account = sample_account(Role::User);
        account.profile = UserProfile {
            phone: Some("+1 555".into()),
            location: Some("Lisbon".into()),
            bio: Some("Rustacean".into()),
            skills: vec!["rust".into()],
            experience: Some("5 years".into()),
            ..Default::default()
        };

        assert_eq!(profile_completeness(&account), 100);
    }

    #[test]
    fn blank_strings_do_not_count() {
        let mut account = sample_account(Role::User);
        account.profile = UserProfile {
            phone: Some("   ".into()),
            bio: Some("Rustacean".into()),
            ..Default::default()
        };

        // name, email, bio
        assert_eq!(profile_completeness(&account), 43);
    }

    #[test]
    fn deactivated_email_embeds_timestamp() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();

        assert_eq!(
            deactivated_email("ana@example.com", at),
            "deleted_1700000000123_ana@example.com"
        );
    }

    #[test]
    fn longest_accepted_email_still_fits_the_column() {
        let email = email_of_length(MAX_EMAIL_LENGTH);

        assert_eq!(deactivated_email(&email, Utc::now()).chars().count(), 255);
    }
}
