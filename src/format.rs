//! Display formats: which fields to render and how to rewrite the pieces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, Locale, StringDate, prelude::*};

/// How wide a numeric field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum FieldWidth {
    /// As few digits as the value needs
    #[display(fmt = "numeric")]
    #[serde(rename = "numeric")]
    Numeric,
    /// Exactly two digits, zero-padded (years keep their last two)
    #[display(fmt = "2-digit")]
    #[serde(rename = "2-digit")]
    TwoDigit,
}

/// Kind of a rendered piece; replacement rules are keyed on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    /// Separators and suffixes supplied by the locale
    #[display(fmt = "literal")]
    Literal,
}

/// Field selection. An absent field is not rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<FieldWidth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<FieldWidth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<FieldWidth>,
}

impl FieldOptions {
    /// Numeric year, two-digit month and day
    pub const fn full_date() -> Self {
        Self {
            year: Some(FieldWidth::Numeric),
            month: Some(FieldWidth::TwoDigit),
            day: Some(FieldWidth::TwoDigit),
        }
    }

    /// Numeric year, two-digit month
    pub const fn month_year() -> Self {
        Self {
            year: Some(FieldWidth::Numeric),
            month: Some(FieldWidth::TwoDigit),
            day: None,
        }
    }

    /// Two-digit month only
    pub const fn month_only() -> Self {
        Self {
            year: None,
            month: Some(FieldWidth::TwoDigit),
            day: None,
        }
    }

    const fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }
}

/// A rendered piece of a formatted date
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Part {
    pub(crate) kind: PartKind,
    pub(crate) value: String,
}

impl Part {
    fn new(kind: PartKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Field selection paired with per-kind replacement text.
///
/// Every rendered piece whose kind has an entry in `parts_options` is
/// replaced by that entry (an empty entry deletes the piece); other pieces
/// are emitted as rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatSpec {
    #[serde(default)]
    pub options: FieldOptions,
    #[serde(default)]
    pub parts_options: BTreeMap<PartKind, String>,
}

impl FormatSpec {
    pub const fn new(options: FieldOptions) -> Self {
        Self {
            options,
            parts_options: BTreeMap::new(),
        }
    }

    /// Replace every piece of `kind` with `text`
    #[must_use]
    pub fn replace(mut self, kind: PartKind, text: impl Into<String>) -> Self {
        self.parts_options.insert(kind, text.into());
        self
    }

    /// Full date with separators removed: `20230615`
    pub fn date_input() -> Self {
        Self::new(FieldOptions::full_date()).replace(PartKind::Literal, "")
    }

    /// Year and month for the calendar header: `2023/06`
    pub fn month_year_label() -> Self {
        Self::new(FieldOptions::month_year()).replace(PartKind::Literal, "/")
    }

    /// Full date read out for a calendar cell: `2023/06/15`
    pub fn date_a11y_label() -> Self {
        Self::new(FieldOptions::full_date()).replace(PartKind::Literal, "/")
    }

    /// Year and month read out for the header: `2023/06`
    pub fn month_year_a11y_label() -> Self {
        Self::new(FieldOptions::month_year()).replace(PartKind::Literal, "/")
    }

    /// Month alone, as the locale renders it: `06月`
    pub fn month_label() -> Self {
        Self::new(FieldOptions::month_only())
    }

    /// Formats a calendar date with this spec
    pub fn render(&self, date: CalendarDate, locale: &Locale) -> String {
        render_parts(date, self.options, locale)
            .into_iter()
            .map(|part| match self.parts_options.get(&part.kind) {
                Some(replacement) => replacement.clone(),
                None => part.value,
            })
            .collect()
    }
}

/// Formats used when reading typed text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseFormats {
    pub date_input: FormatSpec,
}

/// Formats used when showing dates in the field and the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFormats {
    pub date_input: FormatSpec,
    pub month_year_label: FormatSpec,
    pub date_a11y_label: FormatSpec,
    pub month_year_a11y_label: FormatSpec,
    pub month_label: FormatSpec,
}

/// The full set of formats a date field needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFormats {
    pub parse: ParseFormats,
    pub display: DisplayFormats,
}

impl DateFormats {
    /// Formats that keep the field's text in `YYYYMMDD` form
    pub fn string_date() -> Self {
        Self {
            parse: ParseFormats {
                date_input: FormatSpec::date_input(),
            },
            display: DisplayFormats {
                date_input: FormatSpec::date_input(),
                month_year_label: FormatSpec::month_year_label(),
                date_a11y_label: FormatSpec::date_a11y_label(),
                month_year_a11y_label: FormatSpec::month_year_a11y_label(),
                month_label: FormatSpec::month_label(),
            },
        }
    }
}

/// Formats a string date, handing unparsable text back untouched.
pub fn format_date(date: &StringDate, spec: &FormatSpec, locale: &Locale) -> String {
    match date.to_calendar() {
        Ok(calendar) => spec.render(calendar, locale),
        Err(error) => {
            tracing::trace!(%date, %error, "Formatting unparsable date as-is");
            date.to_string()
        }
    }
}

fn render_field(value: i32, width: FieldWidth) -> String {
    match width {
        FieldWidth::Numeric => value.to_string(),
        FieldWidth::TwoDigit => format!("{:02}", value.rem_euclid(100)),
    }
}

// Numeric fields joined by the locale separator; a lone field takes its
// standalone suffix instead. No fields at all means year, month and day.
pub(crate) fn render_parts(
    date: CalendarDate,
    options: FieldOptions,
    locale: &Locale,
) -> Vec<Part> {
    let options = if options.is_empty() {
        FieldOptions {
            year: Some(FieldWidth::Numeric),
            month: Some(FieldWidth::Numeric),
            day: Some(FieldWidth::Numeric),
        }
    } else {
        options
    };

    let fields: Vec<(PartKind, String, &str)> = [
        options.year.map(|w| {
            (
                PartKind::Year,
                render_field(date.year(), w),
                locale.year_suffix.as_str(),
            )
        }),
        options.month.map(|w| {
            (
                PartKind::Month,
                render_field(i32::from(date.month()) + 1, w),
                locale.month_suffix.as_str(),
            )
        }),
        options.day.map(|w| {
            (
                PartKind::Day,
                render_field(i32::from(date.day()), w),
                locale.day_suffix.as_str(),
            )
        }),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut parts = Vec::with_capacity(fields.len() * 2);
    if let [(kind, value, suffix)] = fields.as_slice() {
        parts.push(Part::new(*kind, value.clone()));
        if !suffix.is_empty() {
            parts.push(Part::new(PartKind::Literal, *suffix));
        }
        return parts;
    }
    for (i, (kind, value, _)) in fields.into_iter().enumerate() {
        if i > 0 {
            parts.push(Part::new(PartKind::Literal, locale.date_separator.clone()));
        }
        parts.push(Part::new(kind, value));
    }
    parts
}
