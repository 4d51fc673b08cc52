use chrono::{Days, NaiveDate};

use carebook_common::error::RecordError;

/// Default distance of a new appointment from today.
pub const DEFAULT_DAYS_FROM_NOW: u32 = 1;

/// The calendar date `days_from_now` days after `today`.
pub fn date_after(today: NaiveDate, days_from_now: u32) -> Result<NaiveDate, RecordError> {
    today
        .checked_add_days(Days::new(u64::from(days_from_now)))
        .ok_or(RecordError::DateOutOfRange(days_from_now))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn adds_calendar_days() {
        assert_eq!(date_after(day(2024, 1, 30), 3).unwrap(), day(2024, 2, 2));
        assert_eq!(date_after(day(2024, 2, 28), 1).unwrap(), day(2024, 2, 29));
        assert_eq!(date_after(day(2023, 12, 31), 1).unwrap(), day(2024, 1, 1));
    }

    #[test]
    fn zero_days_is_today() {
        assert_eq!(date_after(day(2024, 5, 5), 0).unwrap(), day(2024, 5, 5));
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(
            date_after(NaiveDate::MAX, 1),
            Err(RecordError::DateOutOfRange(1))
        );
    }
}
