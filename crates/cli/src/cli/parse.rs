use chrono::{DateTime, Utc};
use eventdates_core::parse_iso_datetime;

/// Parses an ISO-8601 date argument.
pub fn parse_date_arg(value: &str) -> Result<DateTime<Utc>, String> {
    parse_iso_datetime(value)
        .ok_or_else(|| format!("invalid date '{value}', expected ISO-8601 such as 2024-01-10"))
}
