use email_address::EmailAddress;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Longest accepted email. `deleted_<13-digit millis>_` plus the address
/// must still fit the 255-character `users.email` column.
pub const MAX_EMAIL_LENGTH: usize = 233;

/// One rejected input field, reported in the `details` array of a 400.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    #[schema(example = "jobTitle")]
    pub field: String,
    #[schema(example = "Job title is required")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Trimmed, non-empty value or `None`.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn is_valid_email(email: &str) -> bool {
    EmailAddress::is_valid(email.trim())
}

/// Lowercased, trimmed email or the field error to report.
pub fn normalize_email(raw: &str) -> Result<String, FieldError> {
    let email = raw.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(FieldError::new("email", "Invalid email"));
    }
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(FieldError::new(
            "email",
            "Email cannot exceed 233 characters",
        ));
    }
    Ok(email)
}

/// Absolute http(s) URL with a host.
pub fn is_http_url(value: &str) -> bool {
    match Url::parse(value.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
