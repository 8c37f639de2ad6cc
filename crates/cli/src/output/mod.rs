//! Output formatting functions.

pub mod json;
pub mod pretty;

use eventdates_core::{serialize_app_state, AppState};

use crate::cli::OutputFormat;

/// Format a state for output.
pub fn format_state(state: &AppState, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(&serialize_app_state(state)),
        OutputFormat::Pretty => pretty::format_dates(state),
    }
}
