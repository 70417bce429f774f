//! Configuration management for the days application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. Command-line flags are applied on top by `main`.
//!
//! # Environment Variables
//!
//! - `DAYS_API_URL`: Origin of the journal backend (defaults to http://localhost:8080)
//! - `DAYS_LOG_FORMAT`: `text` or `json` (defaults to `text`)
//! - `DAYS_LOG_LEVEL`: Default log level when `RUST_LOG` is unset (defaults to `info`)

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_LOG_LEVEL, ENV_VAR_DAYS_API_URL, ENV_VAR_DAYS_LOG_FORMAT,
    ENV_VAR_DAYS_LOG_LEVEL, LOG_FORMAT_JSON, LOG_FORMAT_TEXT, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;

/// Configuration for the days application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use days::Config;
///
/// let config = Config {
///     api_url: "http://journal.local:8080".to_string(),
///     log_format: "json".to_string(),
///     log_level: "debug".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Origin of the journal backend, without the `/api` prefix.
    pub api_url: String,

    /// Log output format, either `text` or `json`.
    pub log_format: String,

    /// Log level used when `RUST_LOG` does not provide a filter.
    pub log_level: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The URL may carry credentials in its userinfo part.
        f.debug_struct("Config")
            .field("api_url", &REDACTED_PLACEHOLDER)
            .field("log_format", &self.log_format)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            log_format: LOG_FORMAT_TEXT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// Empty variables count as unset. The result is not validated here so
    /// command-line overrides can replace bad values first; call
    /// [`Config::validate`] once the configuration is final.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use days::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Using log format {}", config.log_format),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let defaults = Config::default();

        let config = Config {
            api_url: non_empty_var(ENV_VAR_DAYS_API_URL).unwrap_or(defaults.api_url),
            log_format: non_empty_var(ENV_VAR_DAYS_LOG_FORMAT)
                .map(|format| format.to_lowercase())
                .unwrap_or(defaults.log_format),
            log_level: non_empty_var(ENV_VAR_DAYS_LOG_LEVEL).unwrap_or(defaults.log_level),
        };

        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - the API URL is empty
    /// - the API URL is not an `http://` or `https://` URL
    /// - the log format is neither `text` nor `json`
    ///
    /// # Examples
    ///
    /// ```
    /// use days::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.api_url = "ftp://journal.local".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.api_url.trim().is_empty() {
            return Err(AppError::Config("API URL is empty".to_string()));
        }

        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AppError::Config(
                "API URL must start with http:// or https://".to_string(),
            ));
        }

        if self.log_format != LOG_FORMAT_TEXT && self.log_format != LOG_FORMAT_JSON {
            return Err(AppError::Config(format!(
                "Unknown log format '{}'. Expected '{}' or '{}'",
                self.log_format, LOG_FORMAT_TEXT, LOG_FORMAT_JSON
            )));
        }

        Ok(())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
