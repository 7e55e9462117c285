use serde::{Deserialize, Serialize};

use crate::consts::{
    JA_DATE_SEPARATOR, JA_DAY_SUFFIX, JA_JP, JA_MONTH_SUFFIX, JA_MONTHS, JA_WEEKDAY_SUFFIX,
    JA_WEEKDAYS, JA_YEAR_SUFFIX, SUNDAY,
};
use crate::prelude::*;

/// Width of day and month names requested by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    #[display(fmt = "long")]
    Long,
    #[display(fmt = "short")]
    Short,
    #[display(fmt = "narrow")]
    Narrow,
}

/// Label tables and layout rules for the one locale a date field renders in.
///
/// There is no default: callers choose a locale when they build an adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub tag: String,
    /// Short weekday names, Sunday first
    pub weekdays: [String; 7],
    pub weekday_long_suffix: String,
    /// Month names, January first
    pub months: [String; 12],
    pub month_long_suffix: String,
    /// Literal between numeric fields
    pub date_separator: String,
    /// Suffixes for a field rendered on its own
    pub year_suffix: String,
    pub month_suffix: String,
    pub day_suffix: String,
    /// Column the calendar starts on, 0 = Sunday
    pub first_day_of_week: u8,
}

impl Locale {
    /// Japanese: `日`..`土`, numeral months, `/`-separated dates
    pub fn ja_jp() -> Self {
        Self {
            tag: JA_JP.to_owned(),
            weekdays: JA_WEEKDAYS.map(str::to_owned),
            weekday_long_suffix: JA_WEEKDAY_SUFFIX.to_owned(),
            months: JA_MONTHS.map(str::to_owned),
            month_long_suffix: JA_MONTH_SUFFIX.to_owned(),
            date_separator: JA_DATE_SEPARATOR.to_owned(),
            year_suffix: JA_YEAR_SUFFIX.to_owned(),
            month_suffix: JA_MONTH_SUFFIX.to_owned(),
            day_suffix: JA_DAY_SUFFIX.to_owned(),
            first_day_of_week: SUNDAY,
        }
    }

    /// Weekday names, Sunday first. Only the long style carries the suffix.
    pub fn day_of_week_names(&self, style: NameStyle) -> Vec<String> {
        Self::styled(&self.weekdays, &self.weekday_long_suffix, style)
    }

    /// Month names, January first. Only the long style carries the suffix.
    pub fn month_names(&self, style: NameStyle) -> Vec<String> {
        Self::styled(&self.months, &self.month_long_suffix, style)
    }

    fn styled(names: &[String], suffix: &str, style: NameStyle) -> Vec<String> {
        match style {
            NameStyle::Long => names.iter().map(|n| format!("{n}{suffix}")).collect(),
            NameStyle::Short | NameStyle::Narrow => names.to_vec(),
        }
    }
}
