use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::validation::FieldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ──────────────────────────────────────────────────────────
// Role
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Company,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Company => "company",
            Role::Admin => "admin",
        }
    }

    /// Company and admin accounts may publish and manage postings.
    pub fn can_manage_postings(&self) -> bool {
        authorize_roles(*self, &[Role::Company, Role::Admin])
    }

    /// Admins may deactivate any posting; everyone else only their own.
    pub fn bypasses_ownership(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Roles a visitor may pick at registration.
    pub fn is_self_assignable(&self) -> bool {
        matches!(self, Role::User | Role::Company)
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Role::User),
            "company" => Ok(Role::Company),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single place where role membership is decided.
pub fn authorize_roles(role: Role, allowed: &[Role]) -> bool {
    allowed.contains(&role)
}

// ──────────────────────────────────────────────────────────
// Profile & preferences (stored as JSONB)
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalaryRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub job_types: Vec<String>,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<SalaryRange>,
    pub locations: Vec<String>,
}

impl UserPreferences {
    /// Parses a client-supplied preferences object, reporting every
    /// sub-field that has the wrong shape. `null` clears the preferences.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, Vec<FieldError>> {
        use serde_json::Value;

        let object = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            _ => {
                return Err(vec![FieldError::new(
                    "preferences",
                    "Preferences must be an object",
                )])
            }
        };

        let mut errors = Vec::new();

        let mut string_list = |key: &str| -> Vec<String> {
            match object.get(key) {
                None | Some(Value::Null) => Vec::new(),
                Some(Value::Array(items)) => {
                    let mut out = Vec::with_capacity(items.len());
                    for item in items {
                        match item.as_str() {
                            Some(s) => out.push(s.trim().to_string()),
                            None => {
                                errors.push(FieldError::new(
                                    &format!("preferences.{key}"),
                                    "Must be an array of strings",
                                ));
                                return Vec::new();
                            }
                        }
                    }
                    out
                }
                Some(_) => {
                    errors.push(FieldError::new(
                        &format!("preferences.{key}"),
                        "Must be an array",
                    ));
                    Vec::new()
                }
            }
        };

        let job_types = string_list("jobTypes");
        let technologies = string_list("technologies");
        let locations = string_list("locations");

        let salary_range = match object.get("salaryRange") {
            None | Some(Value::Null) => None,
            Some(raw) => match serde_json::from_value::<SalaryRange>(raw.clone()) {
                Ok(range) => {
                    if let (Some(min), Some(max)) = (range.min, range.max) {
                        if min > max {
                            errors.push(FieldError::new(
                                "preferences.salaryRange",
                                "Minimum salary cannot exceed maximum",
                            ));
                        }
                    }
                    Some(range)
                }
                Err(_) => {
                    errors.push(FieldError::new(
                        "preferences.salaryRange",
                        "Must be an object with numeric min and max",
                    ));
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            job_types,
            technologies,
            salary_range,
            locations,
        })
    }
}

// ──────────────────────────────────────────────────────────
// Account (public view of a user, never carries the hash)
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub profile: UserProfile,
    pub preferences: UserPreferences,
    pub is_active: bool,
    pub email_verified: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn user_id(&self) -> UserId {
        UserId::from(self.id)
    }
}
