//! Extension configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. The platform credentials are only required when the platform
//! lookup backend is selected.

use crate::lookup::PlatformConfig;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Where the validators read products and inventory from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupBackend {
    /// In-memory catalog actors, optionally seeded from a JSON fixture.
    Memory { seed: Option<PathBuf> },
    /// The commerce platform's HTTP API.
    Platform(PlatformConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionConfig {
    /// HTTP listen port
    pub port: u16,

    pub backend: LookupBackend,
}

impl ExtensionConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    pub fn from_source<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&var, "PORT", 8080)?;

        let backend = match var("LOOKUP_BACKEND").as_deref().unwrap_or("memory") {
            "memory" => LookupBackend::Memory {
                seed: var("CATALOG_SEED").map(PathBuf::from),
            },
            "platform" => LookupBackend::Platform(PlatformConfig {
                project_key: required(&var, "CTP_PROJECT_KEY")?,
                client_id: required(&var, "CTP_CLIENT_ID")?,
                client_secret: required(&var, "CTP_CLIENT_SECRET")?,
                scope: var("CTP_SCOPE"),
                api_url: required(&var, "CTP_API_URL")?,
                auth_url: required(&var, "CTP_AUTH_URL")?,
                timeout_secs: parse_or(&var, "CTP_TIMEOUT_SECS", 10)?,
            }),
            _ => return Err(ConfigError::InvalidValue("LOOKUP_BACKEND".to_string())),
        };

        Ok(Self { port, backend })
    }
}

fn required<F>(var: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    var(key)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingRequired(key.to_string()))
}

fn parse_or<F, T>(var: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match var(key) {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
