//! Pretty output formatting.

use eventdates_core::{format_iso_datetime, AppState, EventDate};

/// Format an event date for display.
pub fn format_date(event: &EventDate) -> String {
    format!(
        "{}\n  Start: {}\n  End: {}",
        event.id,
        format_iso_datetime(event.start_date),
        format_iso_datetime(event.end_date)
    )
}

/// Format all event dates for display.
pub fn format_dates(state: &AppState) -> String {
    if state.is_empty() {
        return "No event dates.".to_string();
    }
    let entries: Vec<String> = state.dates.iter().map(format_date).collect();
    format!(
        "EVENT DATES ({})\n{}\n{}",
        state.len(),
        "-".repeat(40),
        entries.join("\n\n")
    )
}
