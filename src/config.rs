//! Service configuration loaded from the environment.
//!
//! Values come from process environment variables, optionally seeded from a
//! `.env` file in the working directory. Variables already set in the
//! environment win over the file.
//!
//! | Variable | Default | Constraint |
//! |----------|---------|------------|
//! | `SERVICE_NAME` | - | required, non-empty |
//! | `SERVICE_VERSION` | `0.1.0` | non-empty |
//! | `APP_ID` | empty | |
//! | `DEBUG` | `true` | boolean |
//! | `SERVER_PORT` | `8080` | 1-65535 |
//! | `DEFAULT_TIMEOUT` | `10` | seconds, at least 1 |
//! | `BADGE_BASE_URL` | `https://dummy.com/card-provider-icons` | non-empty |

use crate::detect::DEFAULT_BADGE_BASE_URL;
use std::fmt;
use std::time::Duration;

/// Default value of `SERVICE_VERSION`.
pub const DEFAULT_SERVICE_VERSION: &str = "0.1.0";

/// Default value of `SERVER_PORT`.
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default value of `DEFAULT_TIMEOUT`, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    Missing {
        /// The variable name.
        key: &'static str,
    },

    /// A variable is set but its value is rejected.
    Invalid {
        /// The variable name.
        key: &'static str,
        /// The rejected value.
        value: String,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// The `.env` file exists but could not be read.
    EnvFile(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { key } => write!(f, "missing required configuration {}", key),
            Self::Invalid { key, value, reason } => {
                write!(f, "invalid value {:?} for {}: {}", value, key, reason)
            }
            Self::EnvFile(e) => write!(f, "failed to load .env file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime configuration of the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name reported in logs and by the health endpoint.
    pub service_name: String,
    /// Version reported in logs and by the health endpoint.
    pub service_version: String,
    /// Optional application identifier.
    pub app_id: String,
    /// Enables debug-level logging.
    pub debug: bool,
    /// TCP port to listen on.
    pub server_port: u16,
    /// Per-request timeout.
    pub default_timeout: Duration,
    /// Base URL for provider badge images.
    pub badge_base_url: String,
}

impl Config {
    /// Loads configuration from the process environment and `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::EnvFile(e.to_string())),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Example
    ///
    /// ```
    /// use cards_service::config::Config;
    ///
    /// let config = Config::from_lookup(|key| match key {
    ///     "SERVICE_NAME" => Some("cards".to_string()),
    ///     "SERVER_PORT" => Some("9090".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.server_port, 9090);
    /// assert_eq!(config.service_version, "0.1.0");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string());

        let service_name = get("SERVICE_NAME")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing {
                key: "SERVICE_NAME",
            })?;

        let service_version = get("SERVICE_VERSION")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE_VERSION.to_string());

        let app_id = get("APP_ID").unwrap_or_default();

        let debug = match get("DEBUG") {
            Some(value) => parse_bool("DEBUG", value)?,
            None => true,
        };

        let server_port = match get("SERVER_PORT") {
            Some(value) => parse_port(value)?,
            None => DEFAULT_SERVER_PORT,
        };

        let timeout_secs = match get("DEFAULT_TIMEOUT") {
            Some(value) => parse_timeout(value)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let badge_base_url = get("BADGE_BASE_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BADGE_BASE_URL.to_string());

        Ok(Self {
            service_name,
            service_version,
            app_id,
            debug,
            server_port,
            default_timeout: Duration::from_secs(timeout_secs),
            badge_base_url,
        })
    }

    /// Returns the default log filter for this configuration.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" => Ok(true),
        "0" | "false" | "f" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value,
            reason: "expected a boolean",
        }),
    }
}

fn parse_port(value: String) -> Result<u16, ConfigError> {
    match value.parse::<u16>() {
        Ok(0) => Err(ConfigError::Invalid {
            key: "SERVER_PORT",
            value,
            reason: "port must be between 1 and 65535",
        }),
        Ok(port) => Ok(port),
        Err(_) => Err(ConfigError::Invalid {
            key: "SERVER_PORT",
            value,
            reason: "port must be between 1 and 65535",
        }),
    }
}

fn parse_timeout(value: String) -> Result<u64, ConfigError> {
    match value.parse::<u64>() {
        Ok(secs) if secs >= 1 => Ok(secs),
        _ => Err(ConfigError::Invalid {
            key: "DEFAULT_TIMEOUT",
            value,
            reason: "timeout must be a whole number of seconds, at least 1",
        }),
    }
}
