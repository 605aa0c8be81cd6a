use std::env;

/// HS256 needs at least 32 bytes of key material.
pub const MIN_SECRET_LENGTH: usize = 32;
/// Seven days.
pub const DEFAULT_ACCESS_EXPIRY_SECS: i64 = 604_800;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least 32 characters long for HS256")]
    SecretTooShort,

    #[error("Invalid {0} value")]
    InvalidExpiry(&'static str),
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "job-board-api".to_string());
        let expiry = env::var("JWT_ACCESS_EXPIRY").ok();

        Self::build(secret_key, issuer, expiry.as_deref())
    }

    fn build(
        secret_key: String,
        issuer: String,
        access_expiry: Option<&str>,
    ) -> Result<Self, JwtConfigError> {
        if secret_key.len() < MIN_SECRET_LENGTH {
            return Err(JwtConfigError::SecretTooShort);
        }

        let access_token_expiry = match access_expiry {
            None => DEFAULT_ACCESS_EXPIRY_SECS,
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(JwtConfigError::InvalidExpiry("JWT_ACCESS_EXPIRY"))?,
        };

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
