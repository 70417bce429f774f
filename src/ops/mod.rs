//! High-level operations behind each CLI command.
//!
//! Every operation calls the entry client once and renders the result to the
//! given writer, so the binary stays a thin dispatcher and the rendering can be
//! tested against an in-memory buffer.

use crate::cli::parse_field_assignment;
use crate::client::EntryClient;
use crate::entry::{Entry, FieldId};
use crate::errors::AppResult;
use std::io::Write;
use tracing::info;

/// Prints the entry for `date` as pretty JSON, or a notice if there is none.
///
/// Returns whether an entry was found.
pub fn show_entry(client: &EntryClient, date: &str, out: &mut impl Write) -> AppResult<bool> {
    match client.fetch_entry(date)? {
        Some(entry) => {
            writeln!(out, "{}", serde_json::to_string_pretty(&entry)?)?;
            Ok(true)
        }
        None => {
            writeln!(out, "No entry for {}", date)?;
            Ok(false)
        }
    }
}

/// Builds an entry for `date` from `KEY=VALUE` assignments, saves it and prints
/// the entry the backend stored.
///
/// Later assignments to the same field win.
pub fn save_entry(
    client: &EntryClient,
    date: &str,
    assignments: &[String],
    out: &mut impl Write,
) -> AppResult<Entry> {
    let mut entry = Entry::new(date);
    for assignment in assignments {
        let (id, value) = parse_field_assignment(assignment)?;
        entry.set_field(id, value);
    }

    let saved = client.save_entry(&entry)?;
    info!("Saved entry {}", saved.date);

    writeln!(out, "{}", serde_json::to_string_pretty(&saved)?)?;
    Ok(saved)
}

/// Deletes the entry for `date` and prints a confirmation.
pub fn delete_entry(client: &EntryClient, date: &str, out: &mut impl Write) -> AppResult<()> {
    client.delete_entry(date)?;
    info!("Deleted entry {}", date);

    writeln!(out, "Deleted entry for {}", date)?;
    Ok(())
}

/// Prints one date per line for every entry in the month.
pub fn list_month(
    client: &EntryClient,
    year: i32,
    month: u32,
    out: &mut impl Write,
) -> AppResult<usize> {
    let dates = client.list_entries_by_month(year, month)?;
    for date in &dates {
        writeln!(out, "{}", date)?;
    }
    Ok(dates.len())
}

/// Prints `DATE<TAB>WORKING` for every entry in the month.
pub fn list_summary(
    client: &EntryClient,
    year: i32,
    month: u32,
    out: &mut impl Write,
) -> AppResult<usize> {
    let summaries = client.list_entries_summary_by_month(year, month)?;
    for summary in &summaries {
        writeln!(out, "{}\t{}", summary.date, summary.working)?;
    }
    Ok(summaries.len())
}

/// Prints the recognised field identifiers in form order.
pub fn list_fields(out: &mut impl Write) -> AppResult<()> {
    for id in FieldId::ALL {
        writeln!(out, "{}", id)?;
    }
    Ok(())
}
