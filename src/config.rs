use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub const RESULT_QUEUE_URL: &str = "RESULT_QUEUE_URL";
pub const LOG_LEVEL: &str = "LOG_LEVEL";

/// Where published decisions are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultDestination {
    Stdout,
    File(PathBuf),
}

impl ResultDestination {
    /// Parses a result queue URL: `stdout` or `-`, `file://<path>`, or a
    /// bare filesystem path.
    pub fn parse(url: &str) -> Result<Self, ConfigError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ConfigError::Missing(RESULT_QUEUE_URL));
        }

        if url == "-" || url.eq_ignore_ascii_case("stdout") {
            return Ok(Self::Stdout);
        }

        if let Some(path) = url.strip_prefix("file://") {
            if path.is_empty() {
                return Err(ConfigError::UnsupportedDestination(url.to_string()));
            }
            return Ok(Self::File(PathBuf::from(path)));
        }

        if url.contains("://") {
            return Err(ConfigError::UnsupportedDestination(url.to_string()));
        }

        Ok(Self::File(PathBuf::from(url)))
    }
}

impl fmt::Display for ResultDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultDestination::Stdout => f.write_str("stdout"),
            ResultDestination::File(path) => write!(f, "file://{}", path.display()),
        }
    }
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub result_queue: ResultDestination,
    pub log_level: String,
}

impl AppConfig {
    /// Loads configuration from the process environment, after applying a
    /// `.env` file when one exists.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(RESULT_QUEUE_URL).ok_or(ConfigError::Missing(RESULT_QUEUE_URL))?;
        let result_queue = ResultDestination::parse(&url)?;

        let log_level = lookup(LOG_LEVEL)
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());

        Ok(Self {
            result_queue,
            log_level,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("unsupported result queue destination '{0}': expected stdout, '-', file://<path> or a path")]
    UnsupportedDestination(String),
}
