/*!
# Days

Days is a client for a personal journaling backend that keeps one entry per
calendar day. Each entry holds a timestamp and a set of field values such as
mood, rating, meals and sleep.

## Core Features

- Fetch, save (create or replace) and delete the entry for a date
- List the dates with an entry in a month
- List the working status of every entry in a month
- Command-line front end driving all of the above

## Architecture

- `entry`: `Entry`, `EntrySummary` and the `FieldId` enumeration
- `client`: `EntryClient`, one HTTP request per operation
- `cli`: Command-line interface handling using clap
- `ops`: Rendering of each command's result
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure

## Usage Example

```rust,no_run
use days::{Config, Entry, EntryClient, FieldId};

fn main() -> days::AppResult<()> {
    let config = Config::load()?;
    let client = EntryClient::new(&config.api_url)?;

    let mut entry = Entry::new("2025-06-01");
    entry.set_field(FieldId::Mood, "good");
    let saved = client.save_entry(&entry)?;

    for date in client.list_entries_by_month(2025, 6)? {
        println!("{}", date);
    }
    println!("saved at {}", saved.timestamp);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// HTTP client for the journal entry endpoints
pub mod client;
/// Configuration loading and management
pub mod config;
/// Constants shared across modules
pub mod constants;
/// Journal entry data model
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// Operations behind each CLI command
pub mod ops;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use client::EntryClient;
pub use config::Config;
pub use entry::{Entry, EntrySummary, FieldId};
pub use errors::{AppError, AppResult, ClientError};
