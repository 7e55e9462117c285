//! Form-control shim holding the field's current string date.

use std::fmt;

use crate::{DateAdapter, DateFormats, StringAdapter, StringDate};

type ChangeFn = Box<dyn FnMut(&StringDate)>;
type TouchedFn = Box<dyn FnMut()>;

/// Glue between a form model and a control that edits one value.
pub trait ValueAccessor {
    type Value;

    /// The model changed; show `value` without notifying back.
    fn write_value(&mut self, value: Self::Value);

    fn register_on_change(&mut self, callback: Box<dyn FnMut(&Self::Value)>);

    fn register_on_touched(&mut self, callback: Box<dyn FnMut()>);
}

/// A date field bound to a form: one held value plus the two callbacks
/// the form registers.
///
/// Each control owns its value; nothing is shared between instances.
pub struct DateControl<A = StringAdapter> {
    adapter: A,
    formats: DateFormats,
    value: StringDate,
    on_change: ChangeFn,
    on_touched: TouchedFn,
}

impl<A: DateAdapter<Date = StringDate>> DateControl<A> {
    pub fn new(adapter: A, formats: DateFormats) -> Self {
        Self {
            adapter,
            formats,
            value: StringDate::default(),
            on_change: Box::new(|_: &StringDate| {}),
            on_touched: Box::new(|| {}),
        }
    }

    pub const fn value(&self) -> &StringDate {
        &self.value
    }

    pub const fn adapter(&self) -> &A {
        &self.adapter
    }

    pub const fn formats(&self) -> &DateFormats {
        &self.formats
    }

    /// Sets the held value from outside. Never fires the change callback.
    pub fn write_value(&mut self, value: impl Into<StringDate>) {
        self.value = value.into();
    }

    pub fn register_on_change(&mut self, callback: impl FnMut(&StringDate) + 'static) {
        self.on_change = Box::new(callback);
    }

    pub fn register_on_touched(&mut self, callback: impl FnMut() + 'static) {
        self.on_touched = Box::new(callback);
    }

    /// The user edited the value: hold it and tell the form.
    pub fn on_model_change(&mut self, value: impl Into<StringDate>) {
        self.value = value.into();
        (self.on_change)(&self.value);
    }

    /// The field lost focus.
    pub fn mark_touched(&mut self) {
        (self.on_touched)();
    }

    /// Text shown in the input box
    pub fn display_text(&self) -> String {
        self.adapter.format(&self.value, &self.formats.display.date_input)
    }

    /// Text read out for the current value
    pub fn accessible_label(&self) -> String {
        self.adapter.format(&self.value, &self.formats.display.date_a11y_label)
    }

    /// The user typed `text` into the input box.
    pub fn input_text(&mut self, text: &str) {
        let parsed = self.adapter.parse(text, &self.formats.parse.date_input);
        self.on_model_change(parsed);
    }

    /// The user picked `date` in the calendar popup.
    pub fn select(&mut self, date: StringDate) {
        self.on_model_change(date);
    }
}

impl<A: DateAdapter<Date = StringDate>> ValueAccessor for DateControl<A> {
    type Value = StringDate;

    fn write_value(&mut self, value: StringDate) {
        Self::write_value(self, value);
    }

    fn register_on_change(&mut self, callback: Box<dyn FnMut(&StringDate)>) {
        self.on_change = callback;
    }

    fn register_on_touched(&mut self, callback: Box<dyn FnMut()>) {
        self.on_touched = callback;
    }
}

impl<A: fmt::Debug> fmt::Debug for DateControl<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateControl")
            .field("adapter", &self.adapter)
            .field("formats", &self.formats)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
