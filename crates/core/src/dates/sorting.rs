use std::cmp::Ordering;

use super::types::EventDate;

/// Orders event dates by start date, earliest first.
pub fn date_comparator(a: &EventDate, b: &EventDate) -> Ordering {
    a.start_date.cmp(&b.start_date)
}

/// Sorts event dates ascending by start date.
/// The sort is stable: entries sharing a start date keep their relative order.
pub fn sort_dates(dates: &mut [EventDate]) {
    dates.sort_by(date_comparator);
}

/// Returns true if the dates are in ascending start-date order.
pub fn is_sorted(dates: &[EventDate]) -> bool {
    dates
        .windows(2)
        .all(|pair| date_comparator(&pair[0], &pair[1]) != Ordering::Greater)
}
