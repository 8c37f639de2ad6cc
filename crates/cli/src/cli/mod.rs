//! CLI command definitions.

mod parse;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};

pub use parse::parse_date_arg;

/// Manage an ordered list of event date ranges.
#[derive(Debug, Parser)]
#[command(name = "eventdates")]
#[command(version, about = "Manage an ordered list of event date ranges", long_about = None)]
pub struct Cli {
    /// Path to the stored state (a ContentfulAppState JSON document).
    #[arg(long, env = "EVENTDATES_STATE", default_value = "eventdates.json")]
    pub state: PathBuf,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress output after state changes.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The serialized state as stored.
    Json,
    /// Human-readable listing.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the current state.
    Show,
    /// Write the default state if no state is stored yet.
    Init,
    /// Append a copy of the last event date, optionally shifted.
    Create {
        /// Shift by this many days.
        #[arg(long, allow_negative_numbers = true)]
        days: Option<i64>,
        /// Shift by this many months (ignored when days is non-zero).
        #[arg(long, allow_negative_numbers = true)]
        months: Option<i64>,
    },
    /// Change the dates of an event.
    Update {
        /// Event date ID.
        id: String,
        /// New start date (ISO-8601).
        #[arg(long, value_parser = parse_date_arg)]
        start: Option<DateTime<Utc>>,
        /// New end date (ISO-8601).
        #[arg(long, value_parser = parse_date_arg)]
        end: Option<DateTime<Utc>>,
    },
    /// Delete an event by ID.
    Delete {
        /// Event date ID.
        id: String,
    },
    /// Replace the whole state with a ContentfulAppState JSON file.
    Set {
        /// Path to the replacement state.
        file: PathBuf,
    },
    /// Apply a raw JSON action, e.g. '{"type":"CREATE","payload":{"days":7}}'.
    Dispatch {
        /// Action as JSON.
        action: String,
    },
}

impl Commands {
    /// Returns true if the command never writes the state.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Commands::Show)
    }
}
