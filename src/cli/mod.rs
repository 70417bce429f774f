//! Command-line interface for the days application.
//!
//! Parses arguments with `clap` and normalises user input (dates, months,
//! field assignments) into the shapes the entry client expects.

use crate::constants::{
    APP_DESCRIPTION, APP_NAME, DATE_FORMAT_COMPACT, DATE_FORMAT_ISO, LOG_FORMAT_JSON,
    LOG_FORMAT_TEXT,
};
use crate::entry::FieldId;
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};

/// Command-line client for the Days journal
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Origin of the journal backend (overrides DAYS_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Log output format (overrides DAYS_LOG_FORMAT)
    #[arg(long, global = true, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: Option<String>,

    /// Print verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Operations available from the command line.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Shows the entry for a date (format: YYYY-MM-DD or YYYYMMDD, defaults to today)
    Get { date: Option<String> },

    /// Creates or replaces the entry for a date
    Save {
        /// Entry date (format: YYYY-MM-DD or YYYYMMDD, defaults to today)
        date: Option<String>,

        /// Field value as KEY=VALUE, e.g. MOOD=good (repeatable)
        #[arg(short = 'f', long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },

    /// Deletes the entry for a date
    Delete { date: String },

    /// Lists the dates with an entry in a month (defaults to the current month)
    Month {
        year: Option<i32>,
        /// Month number, January = 1
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },

    /// Lists the working status of every entry in a month (defaults to the current month)
    Summary {
        year: Option<i32>,
        /// Month number, January = 1
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },

    /// Lists the recognised field identifiers
    Fields,
}

/// Parses a date in `YYYY-MM-DD` or `YYYYMMDD` format.
///
/// # Errors
///
/// Returns `AppError::Journal` if the input matches neither format.
pub fn parse_date(input: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(input, DATE_FORMAT_COMPACT))
        .map_err(|_| {
            AppError::Journal(format!(
                "Invalid date '{}'. Expected YYYY-MM-DD or YYYYMMDD",
                input
            ))
        })
}

/// Resolves an optional date argument to the `YYYY-MM-DD` string sent to the backend.
pub fn resolve_date(input: Option<&str>, today: NaiveDate) -> AppResult<String> {
    let date = match input {
        Some(raw) => parse_date(raw)?,
        None => today,
    };
    Ok(date.format(DATE_FORMAT_ISO).to_string())
}

/// Fills in a missing year or month from `today`.
pub fn resolve_month(year: Option<i32>, month: Option<u32>, today: NaiveDate) -> (i32, u32) {
    (
        year.unwrap_or_else(|| today.year()),
        month.unwrap_or_else(|| today.month()),
    )
}

/// Parses a `KEY=VALUE` field assignment. The value may be empty or contain `=`.
///
/// # Errors
///
/// Returns `AppError::Journal` if there is no `=` or the key is not a known field.
pub fn parse_field_assignment(input: &str) -> AppResult<(FieldId, String)> {
    let (key, value) = input.split_once('=').ok_or_else(|| {
        AppError::Journal(format!(
            "Invalid field assignment '{}'. Expected KEY=VALUE",
            input
        ))
    })?;

    let id = key
        .trim()
        .parse::<FieldId>()
        .map_err(|e| AppError::Journal(e.to_string()))?;

    Ok((id, value.to_string()))
}
