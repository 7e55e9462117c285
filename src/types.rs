use crate::ParseError;
use crate::consts::{MAX_YEAR, MIN_DAY, MIN_YEAR, MONTHS_PER_YEAR};
use crate::prelude::*;
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A real Gregorian date in the years a four-digit string date can carry.
///
/// Months are zero-based (`0` is January) to match the calendar widget's
/// convention; days are one-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize,
)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from a year, a zero-based month and a day of month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` outside `0..=9999`,
    /// `ParseError::InvalidMonth` for a month index above 11 and
    /// `ParseError::InvalidDay` for a day the month does not have.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ParseError::InvalidYear(year));
        }
        if i32::from(month) >= MONTHS_PER_YEAR {
            return Err(ParseError::InvalidMonth(month.saturating_add(1)));
        }
        NaiveDate::from_ymd_opt(year, u32::from(month) + 1, u32::from(day))
            .map(Self)
            .ok_or(ParseError::InvalidDay {
                year,
                month: month + 1,
                day,
            })
    }

    /// Builds a date the way a host `Date(year, month, day)` constructor does:
    /// months outside `0..12` carry into the year and days outside the month
    /// roll into neighbouring months.
    ///
    /// Returns `None` when the normalized date leaves the four-digit year range.
    pub fn from_overflowing(year: i64, month: i64, day: i64) -> Option<Self> {
        let months = i64::from(MONTHS_PER_YEAR);
        let year = i32::try_from(year.checked_add(month.div_euclid(months))?).ok()?;
        let month = u32::try_from(month.rem_euclid(months)).ok()? + 1;
        let first = NaiveDate::from_ymd_opt(year, month, u32::from(MIN_DAY))?;

        let offset = day.checked_sub(i64::from(MIN_DAY))?;
        let date = if offset >= 0 {
            first.checked_add_days(Days::new(offset.unsigned_abs()))?
        } else {
            first.checked_sub_days(Days::new(offset.unsigned_abs()))?
        };
        Self::try_from(date).ok()
    }

    /// Converts a date, pinning years outside `0..=9999` to the nearest end
    /// of the range.
    pub fn saturating(date: NaiveDate) -> Self {
        let bound = if date.year() < MIN_YEAR {
            NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1)
        } else if date.year() > MAX_YEAR {
            NaiveDate::from_ymd_opt(MAX_YEAR, 12, 31)
        } else {
            None
        };
        Self(bound.unwrap_or(date))
    }

    /// Full year
    #[inline]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Zero-based month (0 = January)
    #[inline]
    pub fn month(self) -> u8 {
        // month0() is always below 12
        u8::try_from(self.0.month0()).unwrap_or_default()
    }

    /// Day of month, starting at 1
    #[inline]
    pub fn day(self) -> u8 {
        u8::try_from(self.0.day()).unwrap_or_default()
    }

    /// Day of week with Sunday as 0
    pub fn day_of_week(self) -> u8 {
        u8::try_from(self.0.weekday().num_days_from_sunday()).unwrap_or_default()
    }

    /// Number of days in this date's month
    pub fn days_in_month(self) -> u8 {
        // Every in-range month has a successor chrono can represent
        days_in_month(self.year(), self.month()).unwrap_or_default()
    }

    /// Signed number of days from `other` to `self`
    pub fn days_since(self, other: Self) -> i64 {
        self.0.signed_duration_since(other.0).num_days()
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = ParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            Ok(Self(date))
        } else {
            Err(ParseError::InvalidYear(date.year()))
        }
    }
}

/// Whether `year` has a 29 February
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Days in a zero-based month of the given year, or `None` when the month
/// index is above 11 or the year is beyond what chrono can represent.
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    let first = NaiveDate::from_ymd_opt(year, u32::from(month) + 1, u32::from(MIN_DAY))?;
    let next = first.checked_add_months(Months::new(1))?;
    u8::try_from(next.signed_duration_since(first).num_days()).ok()
}
