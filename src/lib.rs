mod adapter;
mod calc;
mod clock;
mod consts;
mod control;
mod format;
mod locale;
mod prelude;
mod types;

pub use adapter::{DateAdapter, DateValue, StringAdapter};
pub use calc::{
    DateError, DateUnit, add_days, add_months, add_years, clamp, compare, get_date,
    get_day_of_week, get_month, get_num_days_in_month, get_year, get_year_name, to_iso8601,
    today, try_compare,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use control::{DateControl, ValueAccessor};
pub use format::{
    DateFormats, DisplayFormats, FieldOptions, FieldWidth, FormatSpec, ParseFormats, PartKind,
    format_date,
};
pub use locale::{Locale, NameStyle};
pub use types::{CalendarDate, days_in_month, is_leap_year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A date written as eight ASCII digits, `YYYYMMDD`, with no separators.
///
/// The wrapped text is not guaranteed to be a valid date: it holds whatever
/// the user typed or the widget produced. Ordering is plain string ordering,
/// which for well-formed values is chronological because every field is
/// zero-padded to a fixed width.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Deref,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct StringDate(String);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Expected {} digits, found {} characters", STRING_DATE_LEN, _0)]
    WrongLength(usize),
    #[display(fmt = "Not a YYYYMMDD date: {_0}")]
    NonDigit(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", _0, MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-12)", _0)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
}

impl std::error::Error for ParseError {}

impl StringDate {
    /// Wraps text without checking it
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The `"00000000"` sentinel
    pub fn invalid() -> Self {
        Self(INVALID_STRING_DATE.to_owned())
    }

    /// Borrow the raw text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the text parses into a real date
    pub fn is_valid(&self) -> bool {
        self.to_calendar().is_ok()
    }

    /// Parses the digits into a calendar date, reporting why it failed
    ///
    /// # Errors
    /// Returns `ParseError::WrongLength` unless the text is exactly eight
    /// characters, `ParseError::NonDigit` when any of them is not an ASCII
    /// digit, and the `CalendarDate::new` errors for impossible dates.
    pub fn to_calendar(&self) -> Result<CalendarDate, ParseError> {
        let s = self.as_str();
        let len = s.chars().count();
        if len != STRING_DATE_LEN {
            return Err(ParseError::WrongLength(len));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::NonDigit(s.to_owned()));
        }

        let (year, rest) = s.split_at(YEAR_DIGITS);
        let (month, day) = rest.split_at(FIELD_DIGITS);
        let year = Self::parse_field::<i32>(year, s)?;
        let month = Self::parse_field::<u8>(month, s)?;
        let day = Self::parse_field::<u8>(day, s)?;

        let month0 = month.checked_sub(1).ok_or(ParseError::InvalidMonth(month))?;
        CalendarDate::new(year, month0, day)
    }

    fn parse_field<T: FromStr>(field: &str, whole: &str) -> Result<T, ParseError> {
        field
            .parse::<T>()
            .map_err(|_| ParseError::NonDigit(whole.to_owned()))
    }
}

impl From<&str> for StringDate {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<CalendarDate> for StringDate {
    fn from(date: CalendarDate) -> Self {
        format_from_calendar(date)
    }
}

impl PartialEq<str> for StringDate {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StringDate {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Parses a string date, returning `None` for anything that is not exactly
/// eight digits naming a real date.
pub fn parse_to_calendar(s: &StringDate) -> Option<CalendarDate> {
    s.to_calendar().ok()
}

/// Renders a calendar date as eight digits.
pub fn format_from_calendar(date: CalendarDate) -> StringDate {
    StringDate(format!(
        "{:0yw$}{:02}{:02}",
        date.year(),
        date.month() + 1,
        date.day(),
        yw = YEAR_DIGITS,
    ))
}
