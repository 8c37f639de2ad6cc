//! Conversion between the in-memory state and its content-store form.
//!
//! Dates travel as ISO-8601 strings in UTC with millisecond precision,
//! e.g. `2024-01-10T00:00:00.000Z`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, Utc};

use super::error::SerializationError;
use super::ids::IdGenerator;
use super::types::{AppState, EventDate, SerializedAppState, SerializedEventDate};

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Offset timestamp whose `%Y` also takes signed years and years past 9999.
const EXTENDED_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Parses an ISO-8601 date string.
///
/// Accepts RFC 3339 timestamps with an offset, the extended-year form that
/// [`format_iso_datetime`] writes outside years 0000-9999 (e.g.
/// `+10237-09-30T00:00:00.000Z`), date-times without an offset (read as UTC)
/// and bare `YYYY-MM-DD` dates (UTC midnight).
pub fn parse_iso_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    let offset_value = match value.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => value.to_string(),
    };
    if let Ok(parsed) = DateTime::parse_from_str(&offset_value, EXTENDED_DATETIME_FORMAT) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Formats a date the way the content store expects it.
pub fn format_iso_datetime(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Converts one serialized event date into its in-memory form.
pub fn parse_dates(serialized: &SerializedEventDate) -> Result<EventDate, SerializationError> {
    Ok(EventDate {
        id: serialized.id.clone(),
        start_date: parse_field("startDate", &serialized.start_date)?,
        end_date: parse_field("endDate", &serialized.end_date)?,
    })
}

/// Converts one in-memory event date into its serialized form.
pub fn serialize_dates(event: &EventDate) -> SerializedEventDate {
    SerializedEventDate {
        id: event.id.clone(),
        start_date: format_iso_datetime(event.start_date),
        end_date: format_iso_datetime(event.end_date),
    }
}

/// Converts the whole state into what gets written to the content store.
pub fn serialize_app_state(state: &AppState) -> SerializedAppState {
    SerializedAppState {
        dates: state.dates.iter().map(serialize_dates).collect(),
    }
}

/// Builds the in-memory state from what the content store returned.
///
/// A missing value yields a single entry starting and ending now. Present
/// values are converted entry by entry, keeping their order and ids as is.
pub fn parse_contentful_app_state(
    state: Option<&SerializedAppState>,
    ids: &mut dyn IdGenerator,
) -> Result<AppState, SerializationError> {
    parse_contentful_app_state_at(state, ids, Utc::now().trunc_subsecs(3))
}

fn parse_contentful_app_state_at(
    state: Option<&SerializedAppState>,
    ids: &mut dyn IdGenerator,
    now: DateTime<Utc>,
) -> Result<AppState, SerializationError> {
    match state {
        None => Ok(AppState::seeded(ids.generate(), now)),
        Some(serialized) => serialized
            .dates
            .iter()
            .map(parse_dates)
            .collect::<Result<Vec<_>, _>>()
            .map(AppState::new),
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<DateTime<Utc>, SerializationError> {
    parse_iso_datetime(value).ok_or_else(|| SerializationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::ids::SequentialIds;
    use chrono::{TimeZone, Timelike};

    fn serialized(id: &str, start: &str, end: &str) -> SerializedEventDate {
        SerializedEventDate {
            id: id.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
        }
    }

    #[test]
    fn test_roundtrip_canonical_strings() {
        let original = serialized("a", "2024-01-10T08:15:30.250Z", "2024-01-12T23:59:59.999Z");

        let parsed = parse_dates(&original).unwrap();

        assert_eq!(serialize_dates(&parsed), original);
    }

    #[test]
    fn test_parse_accepts_offsets() {
        let parsed = parse_dates(&serialized(
            "a",
            "2024-01-10T02:00:00+02:00",
            "2024-01-10T00:00:00Z",
        ))
        .unwrap();

        assert_eq!(parsed.start_date, parsed.end_date);
    }

    #[test]
    fn test_parse_accepts_naive_and_date_only() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();

        assert_eq!(parse_iso_datetime("2024-01-10"), Some(expected));
        assert_eq!(parse_iso_datetime("2024-01-10T00:00:00"), Some(expected));
        assert_eq!(parse_iso_datetime("2024-01-10T00:00"), Some(expected));
        assert_eq!(parse_iso_datetime(" 2024-01-10T00:00:00.000Z "), Some(expected));
    }

    #[test]
    fn test_parse_rejects_invalid_dates() {
        let result = parse_dates(&serialized("a", "2024-01-10T00:00:00.000Z", "soon"));

        assert_eq!(
            result,
            Err(SerializationError::InvalidDate {
                field: "endDate",
                value: "soon".to_string()
            })
        );
        assert_eq!(parse_iso_datetime("2024-02-30"), None);
    }

    #[test]
    fn test_roundtrip_extended_years() {
        let far_future = EventDate::new(
            "future",
            Utc.with_ymd_and_hms(10237, 9, 30, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(10237, 10, 2, 12, 30, 0).unwrap(),
        );
        let before_epoch = EventDate::new(
            "past",
            Utc.with_ymd_and_hms(-167, 9, 13, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(-167, 9, 13, 6, 0, 0).unwrap(),
        );

        let stored = serialize_dates(&far_future);
        assert_eq!(stored.start_date, "+10237-09-30T00:00:00.000Z");
        assert_eq!(parse_dates(&stored), Ok(far_future));

        let stored = serialize_dates(&before_epoch);
        assert_eq!(stored.start_date, "-0167-09-13T00:00:00.000Z");
        assert_eq!(parse_dates(&stored), Ok(before_epoch));
    }

    #[test]
    fn test_parse_extended_year_with_offset() {
        assert_eq!(
            parse_iso_datetime("+10237-09-30T02:00:00.000+02:00"),
            Utc.with_ymd_and_hms(10237, 9, 30, 0, 0, 0).single()
        );
    }

    #[test]
    fn test_serialize_uses_millisecond_precision() {
        let date = Utc
            .with_ymd_and_hms(2024, 1, 10, 0, 0, 0)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();

        assert_eq!(format_iso_datetime(date), "2024-01-10T00:00:00.123Z");
    }

    #[test]
    fn test_parse_missing_state_seeds_default_entry() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut ids = SequentialIds::new("seed-");

        let state = parse_contentful_app_state_at(None, &mut ids, now).unwrap();

        assert_eq!(state, AppState::seeded("seed-1", now));
    }

    #[test]
    fn test_parse_missing_state_uses_current_time() {
        let before = Utc::now().trunc_subsecs(3);
        let state = parse_contentful_app_state(None, &mut SequentialIds::default()).unwrap();
        let after = Utc::now();

        let seeded = &state.dates[0];
        assert_eq!(state.len(), 1);
        assert_eq!(seeded.id, "id-1");
        assert!(seeded.start_date >= before && seeded.start_date <= after);
        assert_eq!(seeded.start_date, seeded.end_date);
    }

    #[test]
    fn test_parse_present_state_keeps_order_and_ids() {
        let stored = SerializedAppState {
            dates: vec![
                serialized("b", "2024-02-01T00:00:00.000Z", "2024-02-01T00:00:00.000Z"),
                serialized("a", "2024-01-01T00:00:00.000Z", "2024-01-01T00:00:00.000Z"),
                serialized("a", "2024-03-01T00:00:00.000Z", "2024-03-01T00:00:00.000Z"),
            ],
        };

        let state =
            parse_contentful_app_state(Some(&stored), &mut SequentialIds::default()).unwrap();

        let ids: Vec<_> = state.dates.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "a"]);
        assert_eq!(serialize_app_state(&state), stored);
    }

    #[test]
    fn test_parse_present_empty_state_stays_empty() {
        let stored = SerializedAppState::default();

        let state =
            parse_contentful_app_state(Some(&stored), &mut SequentialIds::default()).unwrap();

        assert!(state.is_empty());
    }

    #[test]
    fn test_serialize_app_state_json_shape() {
        let start = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        let state = AppState::new(vec![EventDate::new("a", start, start)]);

        let json = serde_json::to_string(&serialize_app_state(&state)).unwrap();

        assert_eq!(
            json,
            r#"{"dates":[{"id":"a","startDate":"2024-01-10T00:00:00.000Z","endDate":"2024-01-10T00:00:00.000Z"}]}"#
        );
    }
}
