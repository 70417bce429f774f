//! HTTP client for the journal entry REST API.
//!
//! Each method performs exactly one request against `{base_url}/api/entries`
//! and turns the response into a typed result or a [`ClientError`]. Nothing is
//! retried or cached, and the client keeps no state beyond its HTTP
//! connection pool.
//!
//! # Example
//!
//! ```no_run
//! use days::client::EntryClient;
//!
//! let client = EntryClient::new("http://127.0.0.1:8080")?;
//! if let Some(entry) = client.fetch_entry("2025-06-01")? {
//!     println!("{} was written at {}", entry.date, entry.timestamp);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::constants::{API_BASE, ENTRIES_PATH, MONTH_PATH, SUMMARY_PATH};
use crate::entry::{Entry, EntrySummary};
use crate::errors::ClientError;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Client for the journal entry endpoints.
#[derive(Debug, Clone)]
pub struct EntryClient {
    base_url: String,
    client: Client,
}

impl EntryClient {
    /// Creates a new entry client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Origin of the journal backend (e.g., "http://127.0.0.1:8080").
    ///   A trailing slash is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Setup` if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        // Requests run until the transport gives up; no client-side deadline.
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(ClientError::Setup)?;

        Ok(Self { base_url, client })
    }

    /// Returns the backend origin requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the entry for `date`.
    ///
    /// `date` is expected in `YYYY-MM-DD` form but is not validated.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the backend answers 404.
    ///
    /// # Errors
    ///
    /// - `ClientError::FetchEntry` for any other non-success status
    /// - `ClientError::Unreachable` if no response was received
    /// - `ClientError::InvalidResponse` if the body is not an entry
    pub fn fetch_entry(&self, date: &str) -> Result<Option<Entry>, ClientError> {
        let url = self.entry_url(date);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(ClientError::Unreachable)?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("No entry for {}", date);
            return Ok(None);
        }
        if !response.status().is_success() {
            debug!("Fetching entry {} failed with {}", date, response.status());
            return Err(ClientError::FetchEntry);
        }

        let entry: Entry = decode(response, "entry")?;
        debug!("Fetched entry {} with {} fields", entry.date, entry.fields.len());
        Ok(Some(entry))
    }

    /// Creates or replaces the entry identified by `entry.date`.
    ///
    /// The backend decides whether this is a create or an update, and may
    /// rewrite parts of the entry (it stamps its own timestamp), so the
    /// returned entry is the one to keep.
    ///
    /// # Errors
    ///
    /// - `ClientError::SaveEntry` for any non-success status
    /// - `ClientError::Unreachable` if no response was received
    /// - `ClientError::InvalidResponse` if the body is not an entry
    pub fn save_entry(&self, entry: &Entry) -> Result<Entry, ClientError> {
        let url = self.entry_url(&entry.date);
        debug!("POST {} ({} fields)", url, entry.fields.len());

        // `json` sets `Content-Type: application/json`.
        let response = self
            .client
            .post(&url)
            .json(entry)
            .send()
            .map_err(ClientError::Unreachable)?;

        if !response.status().is_success() {
            debug!("Saving entry {} failed with {}", entry.date, response.status());
            return Err(ClientError::SaveEntry);
        }

        let saved: Entry = decode(response, "entry")?;
        debug!("Saved entry {} at {}", saved.date, saved.timestamp);
        Ok(saved)
    }

    /// Deletes the entry for `date`.
    ///
    /// Whether deleting a missing entry fails is up to the backend.
    ///
    /// # Errors
    ///
    /// - `ClientError::DeleteEntry` for any non-success status
    /// - `ClientError::Unreachable` if no response was received
    pub fn delete_entry(&self, date: &str) -> Result<(), ClientError> {
        let url = self.entry_url(date);
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .send()
            .map_err(ClientError::Unreachable)?;

        if !response.status().is_success() {
            debug!("Deleting entry {} failed with {}", date, response.status());
            return Err(ClientError::DeleteEntry);
        }

        debug!("Deleted entry {}", date);
        Ok(())
    }

    /// Lists the dates that have an entry in the given month.
    ///
    /// `month` is passed through as-is; the backend treats it as 1-based.
    /// Dates come back in backend order.
    ///
    /// # Errors
    ///
    /// - `ClientError::FetchEntries` for any non-success status
    /// - `ClientError::Unreachable` if no response was received
    /// - `ClientError::InvalidResponse` if the body is not a list of dates
    pub fn list_entries_by_month(&self, year: i32, month: u32) -> Result<Vec<String>, ClientError> {
        let url = self.month_url(year, month);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(ClientError::Unreachable)?;

        if !response.status().is_success() {
            debug!("Listing {}-{} failed with {}", year, month, response.status());
            return Err(ClientError::FetchEntries);
        }

        // An empty month may be encoded as `null`.
        let dates: Option<Vec<String>> = decode(response, "date list")?;
        let dates = dates.unwrap_or_default();
        debug!("Found {} entries in {}-{}", dates.len(), year, month);
        Ok(dates)
    }

    /// Lists `{date, working}` summaries for every entry in the given month.
    ///
    /// # Errors
    ///
    /// - `ClientError::FetchSummary` for any non-success status
    /// - `ClientError::Unreachable` if no response was received
    /// - `ClientError::InvalidResponse` if the body is not a list of summaries
    pub fn list_entries_summary_by_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<EntrySummary>, ClientError> {
        let url = format!("{}/{}", self.month_url(year, month), SUMMARY_PATH);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(ClientError::Unreachable)?;

        if !response.status().is_success() {
            debug!(
                "Summarising {}-{} failed with {}",
                year,
                month,
                response.status()
            );
            return Err(ClientError::FetchSummary);
        }

        let summaries: Option<Vec<EntrySummary>> = decode(response, "summary list")?;
        let summaries = summaries.unwrap_or_default();
        debug!("Found {} summaries in {}-{}", summaries.len(), year, month);
        Ok(summaries)
    }

    fn entry_url(&self, date: &str) -> String {
        format!("{}{}/{}/{}", self.base_url, API_BASE, ENTRIES_PATH, date)
    }

    fn month_url(&self, year: i32, month: u32) -> String {
        format!(
            "{}{}/{}/{}/{}/{}",
            self.base_url, API_BASE, ENTRIES_PATH, MONTH_PATH, year, month
        )
    }
}

fn decode<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, ClientError> {
    response
        .json()
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse {}: {}", what, e)))
}
