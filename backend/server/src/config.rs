use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_PORT: &str = "5004";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://turkish_learning.db?mode=rwc";
pub const DEFAULT_SECRET_KEY: &str = "default-dev-key";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub secret_key: String,
    pub development: bool,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, the process environment in production.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let development = is_development(&lookup);

        let secret_key = lookup("SECRET_KEY")
            .or_else(|| read_secret("SECRET_KEY"))
            .unwrap_or_else(|| {
                if !development {
                    warn!("SECRET_KEY not set outside development, using the default key");
                }
                DEFAULT_SECRET_KEY.to_string()
            });

        Ok(Self {
            port: try_load(&lookup, "PORT", DEFAULT_PORT)?,
            database_url: normalize_database_url(&try_load::<String, _>(
                &lookup,
                "DATABASE_URL",
                DEFAULT_DATABASE_URL,
            )?),
            secret_key,
            development,
        })
    }

    pub fn address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

pub fn is_development<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup("APP_ENV").is_some_and(|value| value == "development")
}

/// Rewrites the legacy `postgres://` scheme to `postgresql://`.
pub fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{rest}"),
        None => url.to_string(),
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }
    })
}

fn read_secret(secret_name: &str) -> Option<String> {
    let path = format!("/run/secrets/{secret_name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            info!("No {secret_name} secret file: {e}");
        })
        .ok()
}
