//! The capability set a calendar widget calls into.

use crate::{
    CalendarDate, Clock, DateError, FormatSpec, Locale, NameStyle, StringDate, SystemClock, calc,
    format::format_date, format_from_calendar,
};

/// Maximum day count shown by the calendar's day grid
const MAX_DATE_NAMES: u8 = 31;

/// A value handed over by the host before it is known to be a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    /// Text as typed or stored
    Text(String),
    /// A structured date from elsewhere in the application
    Calendar(CalendarDate),
    /// Nothing was supplied
    Missing,
}

/// Date math, formatting and labels a date-picker needs, over an arbitrary
/// date representation.
pub trait DateAdapter {
    type Date: Clone + PartialEq + PartialOrd;

    fn locale(&self) -> &Locale;

    fn today(&self) -> Self::Date;

    /// Builds a date from a year, zero-based month and day, letting months
    /// and days outside their ranges roll over.
    ///
    /// # Errors
    /// `DateError::Unrepresentable` when the result cannot be stored.
    fn create_date(&self, year: i64, month: i64, day: i64) -> Result<Self::Date, DateError>;

    fn invalid(&self) -> Self::Date;

    fn is_valid(&self, date: &Self::Date) -> bool;

    /// Reads typed text. Text that is not a date is kept as-is so the field
    /// does not lose what the user typed.
    fn parse(&self, value: &str, format: &FormatSpec) -> Self::Date;

    fn format(&self, date: &Self::Date, format: &FormatSpec) -> String;

    /// # Errors
    /// Fails when `date` is not a real date or the result is out of range.
    fn add_calendar_days(&self, date: &Self::Date, days: i64) -> Result<Self::Date, DateError>;

    /// # Errors
    /// Fails when `date` is not a real date or the result is out of range.
    fn add_calendar_months(&self, date: &Self::Date, months: i64) -> Result<Self::Date, DateError>;

    /// # Errors
    /// Fails when `date` is not a real date or the result is out of range.
    fn add_calendar_years(&self, date: &Self::Date, years: i64) -> Result<Self::Date, DateError>;

    fn get_year(&self, date: &Self::Date) -> i32;

    /// Zero-based month
    fn get_month(&self, date: &Self::Date) -> u8;

    fn get_date(&self, date: &Self::Date) -> u8;

    /// Sunday is 0
    fn get_day_of_week(&self, date: &Self::Date) -> u8;

    fn get_num_days_in_month(&self, date: &Self::Date) -> u8;

    /// # Errors
    /// Fails when `date` is not a real date.
    fn get_year_name(&self, date: &Self::Date) -> Result<String, DateError>;

    fn to_iso8601(&self, date: &Self::Date) -> String;

    fn deserialize(&self, value: DateValue) -> Self::Date;

    /// Signed distance in days; 0 when the dates cannot be compared.
    fn compare_date(&self, first: &Self::Date, second: &Self::Date) -> i64;

    fn clamp_date(
        &self,
        date: &Self::Date,
        min: Option<&Self::Date>,
        max: Option<&Self::Date>,
    ) -> Self::Date;

    fn get_first_day_of_week(&self) -> u8 {
        self.locale().first_day_of_week
    }

    fn get_month_names(&self, style: NameStyle) -> Vec<String> {
        self.locale().month_names(style)
    }

    fn get_day_of_week_names(&self, style: NameStyle) -> Vec<String> {
        self.locale().day_of_week_names(style)
    }

    /// Labels for the day grid, `"1"` to `"31"`
    fn get_date_names(&self) -> Vec<String> {
        (1..=MAX_DATE_NAMES).map(|d| d.to_string()).collect()
    }

    /// Absent dates are only the same as other absent dates.
    fn same_date(&self, first: Option<&Self::Date>, second: Option<&Self::Date>) -> bool {
        first == second
    }

    fn get_valid_date_or_null(&self, value: DateValue) -> Self::Date {
        self.deserialize(value)
    }
}

/// Adapter keeping dates as `YYYYMMDD` strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringAdapter<C = SystemClock> {
    locale: Locale,
    clock: C,
}

impl StringAdapter {
    /// Adapter reading today from the system clock
    pub const fn new(locale: Locale) -> Self {
        Self {
            locale,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> StringAdapter<C> {
    pub const fn with_clock(locale: Locale, clock: C) -> Self {
        Self { locale, clock }
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock> DateAdapter for StringAdapter<C> {
    type Date = StringDate;

    fn locale(&self) -> &Locale {
        &self.locale
    }

    fn today(&self) -> StringDate {
        calc::today(&self.clock)
    }

    fn create_date(&self, year: i64, month: i64, day: i64) -> Result<StringDate, DateError> {
        CalendarDate::from_overflowing(year, month, day)
            .map(format_from_calendar)
            .ok_or(DateError::Unrepresentable { year, month, day })
    }

    fn invalid(&self) -> StringDate {
        StringDate::invalid()
    }

    fn is_valid(&self, date: &StringDate) -> bool {
        date.is_valid()
    }

    fn parse(&self, value: &str, format: &FormatSpec) -> StringDate {
        let value = StringDate::from(value);
        match value.to_calendar() {
            Ok(date) => StringDate::new(format.render(date, &self.locale)),
            Err(error) => {
                tracing::trace!(%value, %error, "Keeping unparsable input");
                value
            }
        }
    }

    fn format(&self, date: &StringDate, format: &FormatSpec) -> String {
        format_date(date, format, &self.locale)
    }

    fn add_calendar_days(&self, date: &StringDate, days: i64) -> Result<StringDate, DateError> {
        calc::add_days(date, days)
    }

    fn add_calendar_months(&self, date: &StringDate, months: i64) -> Result<StringDate, DateError> {
        calc::add_months(date, months)
    }

    fn add_calendar_years(&self, date: &StringDate, years: i64) -> Result<StringDate, DateError> {
        calc::add_years(date, years)
    }

    fn get_year(&self, date: &StringDate) -> i32 {
        calc::get_year(date, &self.clock)
    }

    fn get_month(&self, date: &StringDate) -> u8 {
        calc::get_month(date, &self.clock)
    }

    fn get_date(&self, date: &StringDate) -> u8 {
        calc::get_date(date, &self.clock)
    }

    fn get_day_of_week(&self, date: &StringDate) -> u8 {
        calc::get_day_of_week(date, &self.clock)
    }

    fn get_num_days_in_month(&self, date: &StringDate) -> u8 {
        calc::get_num_days_in_month(date, &self.clock)
    }

    fn get_year_name(&self, date: &StringDate) -> Result<String, DateError> {
        calc::get_year_name(date)
    }

    fn to_iso8601(&self, date: &StringDate) -> String {
        calc::to_iso8601(date)
    }

    fn deserialize(&self, value: DateValue) -> StringDate {
        match value {
            DateValue::Text(text) => StringDate::new(text),
            DateValue::Calendar(date) => format_from_calendar(date),
            DateValue::Missing => StringDate::default(),
        }
    }

    fn compare_date(&self, first: &StringDate, second: &StringDate) -> i64 {
        calc::compare(first, second)
    }

    fn clamp_date(
        &self,
        date: &StringDate,
        min: Option<&StringDate>,
        max: Option<&StringDate>,
    ) -> StringDate {
        calc::clamp(date, min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DateFormats, FixedClock};
    use chrono::NaiveDate;

    fn adapter() -> StringAdapter<FixedClock> {
        StringAdapter::with_clock(
            Locale::ja_jp(),
            FixedClock(NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()),
        )
    }

    fn sd(s: &str) -> StringDate {
        StringDate::from(s)
    }

    #[test]
    fn test_today_and_invalid() {
        let a = adapter();
        assert_eq!(a.today(), "20230615");
        assert_eq!(a.invalid(), "00000000");
        assert!(!a.is_valid(&a.invalid()));
        assert!(a.is_valid(&a.today()));
    }

    #[test]
    fn test_create_date_rolls_over() {
        let a = adapter();
        assert_eq!(a.create_date(2023, 5, 15).unwrap(), "20230615");
        assert_eq!(a.create_date(2023, 1, 31).unwrap(), "20230303");
        assert_eq!(a.create_date(2023, 12, 1).unwrap(), "20240101");
        assert!(matches!(
            a.create_date(10000, 0, 1),
            Err(DateError::Unrepresentable { year: 10000, .. })
        ));
    }

    #[test]
    fn test_parse_normalizes_or_keeps_input() {
        let a = adapter();
        let formats = DateFormats::string_date();
        assert_eq!(a.parse("20230615", &formats.parse.date_input), "20230615");
        assert_eq!(a.parse("2023061", &formats.parse.date_input), "2023061");
        assert_eq!(a.parse("20230230", &formats.parse.date_input), "20230230");
        assert_eq!(
            a.parse("20230615", &formats.display.date_a11y_label),
            "2023/06/15"
        );
    }

    #[test]
    fn test_format_with_display_formats() {
        let a = adapter();
        let display = DateFormats::string_date().display;
        let date = sd("20230615");
        assert_eq!(a.format(&date, &display.date_input), "20230615");
        assert_eq!(a.format(&date, &display.month_year_label), "2023/06");
        assert_eq!(a.format(&date, &display.date_a11y_label), "2023/06/15");
        assert_eq!(a.format(&date, &display.month_year_a11y_label), "2023/06");
        assert_eq!(a.format(&date, &display.month_label), "06月");
        assert_eq!(a.format(&sd("bad-input"), &display.date_input), "bad-input");
    }

    #[test]
    fn test_calendar_arithmetic() {
        let a = adapter();
        assert_eq!(a.add_calendar_days(&sd("20230615"), 20).unwrap(), "20230705");
        assert_eq!(a.add_calendar_months(&sd("20230131"), 1).unwrap(), "20230303");
        assert_eq!(a.add_calendar_years(&sd("20230615"), 1).unwrap(), "20240615");
        assert!(a.add_calendar_days(&sd("notadate"), 1).is_err());
    }

    #[test]
    fn test_getters_use_clock_fallback() {
        let a = adapter();
        let bad = sd("");
        assert_eq!(a.get_year(&bad), 2023);
        assert_eq!(a.get_month(&bad), 5);
        assert_eq!(a.get_date(&bad), 15);
        assert_eq!(a.get_day_of_week(&bad), 4);
        assert_eq!(a.get_num_days_in_month(&bad), 30);
        assert_eq!(a.get_year(&sd("19991231")), 1999);
        assert_eq!(a.get_year_name(&sd("19991231")).unwrap(), "1999");
        assert!(a.get_year_name(&bad).is_err());
    }

    #[test]
    fn test_labels() {
        let a = adapter();
        assert_eq!(a.get_first_day_of_week(), 0);
        assert_eq!(
            a.get_day_of_week_names(NameStyle::Short),
            ["日", "月", "火", "水", "木", "金", "土"]
        );
        assert!(
            a.get_day_of_week_names(NameStyle::Long)
                .iter()
                .all(|n| n.ends_with("曜日"))
        );
        assert_eq!(a.get_month_names(NameStyle::Long)[5], "6月");
        let names = a.get_date_names();
        assert_eq!(names.len(), 31);
        assert_eq!(names[0], "1");
        assert_eq!(names[30], "31");
    }

    #[test]
    fn test_deserialize() {
        let a = adapter();
        assert_eq!(a.deserialize(DateValue::Text("20230615".into())), "20230615");
        assert_eq!(a.deserialize(DateValue::Text("junk".into())), "junk");
        assert_eq!(
            a.deserialize(DateValue::Calendar(CalendarDate::new(2023, 5, 15).unwrap())),
            "20230615"
        );
        assert_eq!(a.get_valid_date_or_null(DateValue::Missing), "");
    }

    #[test]
    fn test_compare_same_clamp() {
        let a = adapter();
        assert_eq!(a.compare_date(&sd("20230616"), &sd("20230615")), 1);
        assert_eq!(a.compare_date(&sd("x"), &sd("20230615")), 0);
        assert!(a.same_date(Some(&sd("20230615")), Some(&sd("20230615"))));
        assert!(!a.same_date(Some(&sd("20230615")), Some(&sd("20230616"))));
        assert!(a.same_date(None, None));
        assert!(!a.same_date(None, Some(&sd("20230615"))));
        assert_eq!(a.clamp_date(&sd("20230615"), None, None), "20230615");
        assert_eq!(
            a.clamp_date(&sd("20230615"), Some(&sd("20230701")), None),
            "20230701"
        );
    }

    #[test]
    fn test_iso8601() {
        let a = adapter();
        assert_eq!(a.to_iso8601(&sd("20230615")), "2023-06-15");
        assert_eq!(a.to_iso8601(&sd("bad")), "bad");
    }

    #[test]
    fn test_system_adapter_today_is_valid() {
        let a = StringAdapter::new(Locale::ja_jp());
        assert!(a.is_valid(&a.today()));
        assert_eq!(a.locale().tag, "ja-JP");
    }
}
