//! Error handling utilities for the days application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, the
//! per-operation `ClientError` raised by the entry client, and the convenience
//! type alias `AppResult` for functions that can return these errors.

use thiserror::Error;

/// Represents the failures the entry client can report.
///
/// The per-operation variants carry a fixed message naming the operation that
/// failed. The HTTP status and response body are deliberately not kept: a
/// caller can only tell *which* call failed, not why the backend refused it.
///
/// # Examples
///
/// ```
/// use days::errors::ClientError;
///
/// let error = ClientError::FetchEntry;
/// assert_eq!(format!("{}", error), "Failed to fetch entry");
/// ```
#[derive(Debug, Error)]
pub enum ClientError {
    /// Reading a single entry returned a non-success status other than 404.
    #[error("Failed to fetch entry")]
    FetchEntry,

    /// Saving an entry returned a non-success status.
    #[error("Failed to save entry")]
    SaveEntry,

    /// Deleting an entry returned a non-success status.
    #[error("Failed to delete entry")]
    DeleteEntry,

    /// Listing the entry dates of a month returned a non-success status.
    #[error("Failed to fetch entries")]
    FetchEntries,

    /// Listing the entry summaries of a month returned a non-success status.
    #[error("Failed to fetch entries summary")]
    FetchSummary,

    /// The HTTP client could not be constructed.
    #[error("Failed to initialise HTTP client: {0}")]
    Setup(#[source] reqwest::Error),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("Journal backend unreachable: {0}. Is the server running and DAYS_API_URL correct?")]
    Unreachable(#[source] reqwest::Error),

    /// A success response whose body is not the expected JSON.
    #[error("Invalid response from journal backend: {0}")]
    InvalidResponse(String),
}

/// Represents all possible errors that can occur in the days application.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use days::errors::AppError;
///
/// let error = AppError::Config("Missing API URL".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing API URL");
/// ```
///
/// Converting from a client error:
/// ```
/// use days::errors::{AppError, ClientError};
///
/// let app_error: AppError = ClientError::SaveEntry.into();
/// assert!(matches!(app_error, AppError::Client(ClientError::SaveEntry)));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors, e.g. writing command output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid journal input such as a malformed date or field assignment.
    #[error("Journal logic error: {0}")]
    Journal(String),

    /// Errors raised while talking to the journal backend.
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// Errors encoding values for output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use days::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Journal("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
