/*!
# Days - Journal Client

Command-line client for the Days journal backend. Reads, writes and lists
daily journal entries over the backend's REST API.

## Usage

```text
days [OPTIONS] <COMMAND>

Commands:
  get      Shows the entry for a date
  save     Creates or replaces the entry for a date
  delete   Deletes the entry for a date
  month    Lists the dates with an entry in a month
  summary  Lists the working status of every entry in a month
  fields   Lists the recognised field identifiers

Options:
      --api-url <URL>         Origin of the journal backend
      --log-format <FORMAT>   Log output format [possible values: text, json]
  -v, --verbose               Print verbose output
```

## Configuration

- `DAYS_API_URL`: Origin of the journal backend (defaults to http://localhost:8080)
- `DAYS_LOG_FORMAT`: `text` or `json`
- `DAYS_LOG_LEVEL`: Default log level; `RUST_LOG` takes precedence
*/

use chrono::Local;
use clap::Parser;
use days::cli::{resolve_date, resolve_month, CliArgs, Command};
use days::client::EntryClient;
use days::config::Config;
use days::constants::{
    LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME, VERBOSE_LOG_LEVEL,
};
use days::errors::AppResult;
use days::ops;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Configuration problems are reported before logging exists.
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);

    let correlation_id = Uuid::new_v4();
    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = span.enter();

    match run(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Logged once, here at the boundary.
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &CliArgs) -> AppResult<Config> {
    let mut config = Config::load()?;

    if let Some(url) = &args.api_url {
        config.api_url = url.clone();
    }
    if let Some(format) = &args.log_format {
        config.log_format = format.clone();
    }
    if args.verbose {
        config.log_level = VERBOSE_LOG_LEVEL.to_string();
    }

    config.validate()?;
    Ok(config)
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_format == LOG_FORMAT_JSON {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(io::stderr),
            )
            .init();
    }
}

fn run(command: Command, config: &Config) -> AppResult<()> {
    info!("Starting days");
    debug!("Command: {:?}, config: {:?}", command, config);

    let today = Local::now().date_naive();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let client = EntryClient::new(&config.api_url)?;

    match command {
        Command::Get { date } => {
            let date = resolve_date(date.as_deref(), today)?;
            ops::show_entry(&client, &date, &mut out)?;
        }
        Command::Save { date, fields } => {
            let date = resolve_date(date.as_deref(), today)?;
            ops::save_entry(&client, &date, &fields, &mut out)?;
        }
        Command::Delete { date } => {
            let date = resolve_date(Some(&date), today)?;
            ops::delete_entry(&client, &date, &mut out)?;
        }
        Command::Month { year, month } => {
            let (year, month) = resolve_month(year, month, today);
            let count = ops::list_month(&client, year, month, &mut out)?;
            debug!("Listed {} dates", count);
        }
        Command::Summary { year, month } => {
            let (year, month) = resolve_month(year, month, today);
            let count = ops::list_summary(&client, year, month, &mut out)?;
            debug!("Listed {} summaries", count);
        }
        Command::Fields => ops::list_fields(&mut out)?,
    }

    out.flush()?;
    Ok(())
}
