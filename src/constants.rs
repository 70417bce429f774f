//! Constants used throughout the application.
//!
//! Grouped by concern so API paths, environment variables and formats are
//! referenced consistently from the client, the configuration and the CLI.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "days";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Command-line client for the Days journal";

// API
/// Path prefix of every backend endpoint.
pub const API_BASE: &str = "/api";
/// Resource collection holding journal entries, relative to [`API_BASE`].
pub const ENTRIES_PATH: &str = "entries";
/// Sub-resource listing entries by month, relative to [`ENTRIES_PATH`].
pub const MONTH_PATH: &str = "month";
/// Suffix of the per-month summary endpoint.
pub const SUMMARY_PATH: &str = "summary";
/// Backend origin used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

// Logging
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "days";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";

// Configuration Keys & Environment Variables
/// Environment variable holding the backend origin.
pub const ENV_VAR_DAYS_API_URL: &str = "DAYS_API_URL";
/// Environment variable selecting the log format.
pub const ENV_VAR_DAYS_LOG_FORMAT: &str = "DAYS_LOG_FORMAT";
/// Environment variable selecting the default log level.
pub const ENV_VAR_DAYS_LOG_LEVEL: &str = "DAYS_LOG_LEVEL";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD), the wire format of entry dates.
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";

// Validation
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";
