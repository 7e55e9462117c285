//! Calendar operations over string dates.
//!
//! Two error tiers: arithmetic needs a real date and fails with
//! [`DateError`], while the per-field getters fall back to today and
//! [`compare`] treats unparsable operands as equal.

use crate::{
    CalendarDate, Clock, FIELD_DIGITS, ISO_SEPARATOR, ParseError, STRING_DATE_LEN, StringDate,
    YEAR_DIGITS, format_from_calendar, prelude::*,
};

/// Unit of a calendar shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateUnit {
    #[display(fmt = "days")]
    Days,
    #[display(fmt = "months")]
    Months,
    #[display(fmt = "years")]
    Years,
}

/// Error type for operations that require a real date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Input does not parse as `YYYYMMDD`.
    #[error("Invalid date: {date}")]
    InvalidDate {
        date: StringDate,
        #[source]
        source: ParseError,
    },

    /// Shift lands outside the years a string date can hold.
    #[error("Date out of range: {date} shifted by {amount} {unit}")]
    OutOfRange {
        date: StringDate,
        amount: i64,
        unit: DateUnit,
    },

    /// Components normalize to a date outside years 0..=9999.
    #[error("No four-digit date for year {year}, month index {month}, day {day}")]
    Unrepresentable { year: i64, month: i64, day: i64 },
}

fn require(date: &StringDate) -> Result<CalendarDate, DateError> {
    date.to_calendar().map_err(|source| DateError::InvalidDate {
        date: date.clone(),
        source,
    })
}

fn shift(date: &StringDate, amount: i64, unit: DateUnit) -> Result<StringDate, DateError> {
    let base = require(date)?;
    let (years, months, days) = match unit {
        DateUnit::Years => (amount, 0, 0),
        DateUnit::Months => (0, amount, 0),
        DateUnit::Days => (0, 0, amount),
    };
    let out_of_range = || DateError::OutOfRange {
        date: date.clone(),
        amount,
        unit,
    };
    let year = i64::from(base.year())
        .checked_add(years)
        .ok_or_else(out_of_range)?;
    let month = i64::from(base.month())
        .checked_add(months)
        .ok_or_else(out_of_range)?;
    let day = i64::from(base.day())
        .checked_add(days)
        .ok_or_else(out_of_range)?;
    CalendarDate::from_overflowing(year, month, day)
        .map(format_from_calendar)
        .ok_or_else(out_of_range)
}

/// Adds days; crossing month and year ends as the calendar does.
///
/// # Errors
/// `DateError::InvalidDate` if `date` does not parse, `DateError::OutOfRange`
/// if the result is outside years 0..=9999.
pub fn add_days(date: &StringDate, days: i64) -> Result<StringDate, DateError> {
    shift(date, days, DateUnit::Days)
}

/// Adds months, keeping the day of month. A day the target month lacks
/// rolls forward: January 31 plus one month is March 3 in a common year.
///
/// # Errors
/// Same as [`add_days`].
pub fn add_months(date: &StringDate, months: i64) -> Result<StringDate, DateError> {
    shift(date, months, DateUnit::Months)
}

/// Adds years, keeping month and day. February 29 rolls to March 1 in a
/// common year.
///
/// # Errors
/// Same as [`add_days`].
pub fn add_years(date: &StringDate, years: i64) -> Result<StringDate, DateError> {
    shift(date, years, DateUnit::Years)
}

/// Signed day count `first - second`, or 0 when either does not parse.
pub fn compare(first: &StringDate, second: &StringDate) -> i64 {
    try_compare(first, second).unwrap_or_else(|error| {
        tracing::debug!(%first, %second, %error, "Comparing unparsable dates as equal");
        0
    })
}

/// Signed day count `first - second`.
///
/// # Errors
/// `DateError::InvalidDate` naming the first operand that does not parse.
pub fn try_compare(first: &StringDate, second: &StringDate) -> Result<i64, DateError> {
    Ok(require(first)?.days_since(require(second)?))
}

/// Clamps by string order. A missing or empty bound is replaced by `date`
/// itself, so that side never moves it.
pub fn clamp(date: &StringDate, min: Option<&StringDate>, max: Option<&StringDate>) -> StringDate {
    let min = min.filter(|m| !m.is_empty()).unwrap_or(date);
    let max = max.filter(|m| !m.is_empty()).unwrap_or(date);
    if date < min {
        min.clone()
    } else if date > max {
        max.clone()
    } else {
        date.clone()
    }
}

/// Rewrites `YYYYMMDD` as `YYYY-MM-DD`. Text that is not eight ASCII digits
/// comes back unchanged; the fields are not checked against the calendar.
///
/// Earlier versions of this adapter returned every input unchanged here,
/// eight-digit dates included.
pub fn to_iso8601(date: &StringDate) -> String {
    let s = date.as_str();
    if s.len() != STRING_DATE_LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
        return s.to_owned();
    }
    let (year, rest) = s.split_at(YEAR_DIGITS);
    let (month, day) = rest.split_at(FIELD_DIGITS);
    format!("{year}{ISO_SEPARATOR}{month}{ISO_SEPARATOR}{day}")
}

/// Today according to `clock`
pub fn today<C: Clock + ?Sized>(clock: &C) -> StringDate {
    format_from_calendar(clock.calendar_today())
}

fn or_today<C: Clock + ?Sized>(date: &StringDate, clock: &C) -> CalendarDate {
    date.to_calendar().unwrap_or_else(|error| {
        tracing::trace!(%date, %error, "Falling back to today");
        clock.calendar_today()
    })
}

pub fn get_year<C: Clock + ?Sized>(date: &StringDate, clock: &C) -> i32 {
    or_today(date, clock).year()
}

/// Zero-based month
pub fn get_month<C: Clock + ?Sized>(date: &StringDate, clock: &C) -> u8 {
    or_today(date, clock).month()
}

/// Day of month
pub fn get_date<C: Clock + ?Sized>(date: &StringDate, clock: &C) -> u8 {
    or_today(date, clock).day()
}

/// Sunday is 0
pub fn get_day_of_week<C: Clock + ?Sized>(date: &StringDate, clock: &C) -> u8 {
    or_today(date, clock).day_of_week()
}

pub fn get_num_days_in_month<C: Clock + ?Sized>(date: &StringDate, clock: &C) -> u8 {
    or_today(date, clock).days_in_month()
}

/// The year as text, for the multi-year view.
///
/// # Errors
/// `DateError::InvalidDate` if `date` does not parse.
pub fn get_year_name(date: &StringDate) -> Result<String, DateError> {
    Ok(require(date)?.year().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use chrono::NaiveDate;

    fn sd(s: &str) -> StringDate {
        StringDate::from(s)
    }

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
    }

    #[test]
    fn test_add_days() {
        assert_eq!(add_days(&sd("20230615"), 1).unwrap(), "20230616");
        assert_eq!(add_days(&sd("20231231"), 1).unwrap(), "20240101");
        assert_eq!(add_days(&sd("20240301"), -1).unwrap(), "20240229");
        assert_eq!(add_days(&sd("20230615"), 0).unwrap(), "20230615");
        assert_eq!(add_days(&sd("20230101"), 365).unwrap(), "20240101");
    }

    #[test]
    fn test_add_months_rolls_over() {
        assert_eq!(add_months(&sd("20230131"), 1).unwrap(), "20230303");
        assert_eq!(add_months(&sd("20240131"), 1).unwrap(), "20240302");
        assert_eq!(add_months(&sd("20230531"), 1).unwrap(), "20230701");
        assert_eq!(add_months(&sd("20230330"), -1).unwrap(), "20230302");
        assert_eq!(add_months(&sd("20230615"), -6).unwrap(), "20221215");
        assert_eq!(add_months(&sd("20230615"), 24).unwrap(), "20250615");
    }

    #[test]
    fn test_add_years() {
        assert_eq!(add_years(&sd("20240229"), 1).unwrap(), "20250301");
        assert_eq!(add_years(&sd("20240229"), 4).unwrap(), "20280229");
        assert_eq!(add_years(&sd("20230615"), -10).unwrap(), "20130615");
    }

    #[test]
    fn test_arithmetic_rejects_invalid() {
        let result = add_days(&sd("notadate"), 1);
        assert!(matches!(result, Err(DateError::InvalidDate { .. })));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("Invalid date")
        );
        assert!(add_months(&StringDate::invalid(), 1).is_err());
        assert!(add_years(&sd(""), 1).is_err());
    }

    #[test]
    fn test_arithmetic_out_of_range() {
        assert!(matches!(
            add_days(&sd("99991231"), 1),
            Err(DateError::OutOfRange {
                unit: DateUnit::Days,
                ..
            })
        ));
        assert!(matches!(
            add_years(&sd("00010101"), -2),
            Err(DateError::OutOfRange { .. })
        ));
        assert!(matches!(
            add_days(&sd("20230101"), i64::MAX),
            Err(DateError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(&sd("20230301"), &sd("20230201")), 28);
        assert_eq!(compare(&sd("20230201"), &sd("20230301")), -28);
        assert_eq!(compare(&sd("20230615"), &sd("20230615")), 0);
    }

    #[test]
    fn test_compare_unparsable_is_equal() {
        assert_eq!(compare(&sd("garbage"), &sd("20230615")), 0);
        assert_eq!(compare(&sd("20230615"), &StringDate::invalid()), 0);
        assert!(try_compare(&sd("garbage"), &sd("20230615")).is_err());
        assert_eq!(try_compare(&sd("20230616"), &sd("20230615")), Ok(1));
    }

    #[test]
    fn test_clamp() {
        let min = sd("20230101");
        let max = sd("20231231");
        assert_eq!(clamp(&sd("20230615"), None, None), "20230615");
        assert_eq!(clamp(&sd("20221231"), Some(&min), Some(&max)), "20230101");
        assert_eq!(clamp(&sd("20240101"), Some(&min), Some(&max)), "20231231");
        assert_eq!(clamp(&sd("20230615"), Some(&min), Some(&max)), "20230615");
        assert_eq!(clamp(&sd("20240101"), Some(&min), None), "20240101");
        assert_eq!(clamp(&sd("20221231"), None, Some(&max)), "20221231");
        assert_eq!(clamp(&sd("20221231"), Some(&sd("")), Some(&max)), "20221231");
    }

    #[test]
    fn test_to_iso8601() {
        assert_eq!(to_iso8601(&sd("20230615")), "2023-06-15");
        assert_eq!(to_iso8601(&sd("2023-06-15")), "2023-06-15");
        assert_eq!(to_iso8601(&sd("bad")), "bad");
        assert_eq!(to_iso8601(&sd("")), "");
    }

    #[test]
    fn test_getters() {
        let c = clock();
        let date = sd("20230615");
        assert_eq!(get_year(&date, &c), 2023);
        assert_eq!(get_month(&date, &c), 5);
        assert_eq!(get_date(&date, &c), 15);
        assert_eq!(get_day_of_week(&date, &c), 4);
        assert_eq!(get_num_days_in_month(&date, &c), 30);
        assert_eq!(get_num_days_in_month(&sd("20230201"), &c), 28);
    }

    #[test]
    fn test_getters_fall_back_to_today() {
        let c = clock();
        let bad = sd("bad");
        assert_eq!(get_year(&bad, &c), 2024);
        assert_eq!(get_month(&bad, &c), 1);
        assert_eq!(get_date(&bad, &c), 29);
        // 2024-02-29 was a Thursday
        assert_eq!(get_day_of_week(&bad, &c), 4);
        assert_eq!(get_num_days_in_month(&bad, &c), 29);
        assert_eq!(today(&c), "20240229");
    }

    #[test]
    fn test_year_name() {
        assert_eq!(get_year_name(&sd("20230615")).unwrap(), "2023");
        assert_eq!(get_year_name(&sd("09870615")).unwrap(), "987");
        assert!(get_year_name(&sd("bad")).is_err());
    }
}
