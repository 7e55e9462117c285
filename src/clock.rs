//! Where "today" comes from.

use chrono::{Local, NaiveDate};

use crate::CalendarDate;

/// Source of the current local date
pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Today as a calendar date, pinned into the four-digit year range
    fn calendar_today(&self) -> CalendarDate {
        CalendarDate::saturating(self.today())
    }
}

/// Reads the system clock in the local time zone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl From<CalendarDate> for FixedClock {
    fn from(date: CalendarDate) -> Self {
        Self(date.into())
    }
}
