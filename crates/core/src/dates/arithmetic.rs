use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Utc};

use super::error::DateError;

/// Shifts `date` by `days` whole days, keeping the time of day.
/// Negative values shift backwards.
pub fn add_days(date: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>, DateError> {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(DateError::OutOfRange {
            amount: days,
            unit: "days",
        })
}

/// Shifts `date` by `months` calendar months, keeping the time of day.
///
/// The day of month is carried over with calendar rollover rather than
/// clamping: January 31st plus one month lands in early March.
pub fn add_months(date: DateTime<Utc>, months: i64) -> Result<DateTime<Utc>, DateError> {
    shift_months(date, months).ok_or(DateError::OutOfRange {
        amount: months,
        unit: "months",
    })
}

fn shift_months(date: DateTime<Utc>, months: i64) -> Option<DateTime<Utc>> {
    let total = i64::from(date.year())
        .checked_mul(12)?
        .checked_add(i64::from(date.month0()))?
        .checked_add(months)?;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12)).ok()? + 1;

    let shifted = NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(date.day0())))?;

    Some(shifted.and_time(date.time()).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 14, 30, 15).unwrap()
    }

    #[test]
    fn test_add_days_zero_is_identity() {
        let date = at(2024, 1, 10);
        assert_eq!(add_days(date, 0).unwrap(), date);
    }

    #[test]
    fn test_add_days_forward_and_back() {
        let date = at(2024, 1, 10);
        let forward = add_days(date, 45).unwrap();

        assert_eq!(forward, at(2024, 2, 24));
        assert_eq!(add_days(forward, -45).unwrap(), date);
    }

    #[test]
    fn test_add_days_rolls_into_next_month() {
        assert_eq!(add_days(at(2024, 1, 30), 2).unwrap(), at(2024, 2, 1));
        assert_eq!(add_days(at(2024, 2, 28), 1).unwrap(), at(2024, 2, 29));
        assert_eq!(add_days(at(2023, 12, 31), 1).unwrap(), at(2024, 1, 1));
    }

    #[test]
    fn test_add_days_out_of_range() {
        let result = add_days(at(2024, 1, 1), i64::MAX);
        assert_eq!(
            result,
            Err(DateError::OutOfRange {
                amount: i64::MAX,
                unit: "days"
            })
        );
    }

    #[test]
    fn test_add_months_keeps_day_and_time() {
        assert_eq!(add_months(at(2024, 1, 15), 1).unwrap(), at(2024, 2, 15));
        assert_eq!(add_months(at(2024, 1, 15), 0).unwrap(), at(2024, 1, 15));
    }

    #[test]
    fn test_add_months_carries_year() {
        assert_eq!(add_months(at(2024, 12, 15), 1).unwrap(), at(2025, 1, 15));
        assert_eq!(add_months(at(2024, 3, 15), -3).unwrap(), at(2023, 12, 15));
        assert_eq!(add_months(at(2024, 3, 15), 24).unwrap(), at(2026, 3, 15));
    }

    #[test]
    fn test_add_months_rolls_over_short_months() {
        // 2024 is a leap year: Feb has 29 days, so the 31st spills two days.
        assert_eq!(add_months(at(2024, 1, 31), 1).unwrap(), at(2024, 3, 2));
        assert_eq!(add_months(at(2023, 1, 31), 1).unwrap(), at(2023, 3, 3));
        assert_eq!(add_months(at(2024, 5, 31), 1).unwrap(), at(2024, 7, 1));
    }

    #[test]
    fn test_add_months_out_of_range() {
        assert!(matches!(
            add_months(at(2024, 1, 1), i64::MAX),
            Err(DateError::OutOfRange { unit: "months", .. })
        ));
    }
}
