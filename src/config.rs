use std::env;
use std::time::Duration;

use crate::job::adapter::outgoing::DEFAULT_JOBICY_URL;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Process-level settings read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub jobicy_api_url: String,
    pub external_api_timeout: Duration,
    pub random_jobs_tech_count: usize,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 20u32)?;
        let db_min_connections = parse_or(&lookup, "DB_MIN_CONNECTIONS", 2u32)?;
        if db_min_connections > db_max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                value: db_min_connections.to_string(),
            });
        }

        let timeout_secs = parse_or(&lookup, "EXTERNAL_API_TIMEOUT_SECS", 5u64)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "EXTERNAL_API_TIMEOUT_SECS",
                value: "0".into(),
            });
        }

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            None => true,
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "RUN_MIGRATIONS",
                        value: raw,
                    })
                }
            },
        };

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 5000u16)?,
            db_max_connections,
            db_min_connections,
            jobicy_api_url: lookup("JOBICY_API_URL")
                .unwrap_or_else(|| DEFAULT_JOBICY_URL.to_string()),
            external_api_timeout: Duration::from_secs(timeout_secs),
            random_jobs_tech_count: parse_or(&lookup, "RANDOM_JOBS_TECH_COUNT", 3usize)?,
            run_migrations,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
