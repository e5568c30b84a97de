//! Inputs of the serializer: the selected day and the invite request.

use calendari_calendar::{MONTH_NAMES, MonthDay, YearMonth};
use calendari_classify::{AnnotationTables, describe_day};
use chrono::{Datelike, NaiveDate};

use crate::error::InviteError;

/// Returns the title an invite gets before the user edits it,
/// `"Evento día <day> de <MonthName>"`.
pub fn default_title(date: NaiveDate) -> String {
    format!(
        "Evento día {} de {}",
        date.day(),
        MONTH_NAMES[date.month0() as usize]
    )
}

/// Validates (year, zero-based month index, day) into a date.
pub(crate) fn resolve_date(
    year: i32,
    month_index: u32,
    day: u32,
) -> Result<NaiveDate, InviteError> {
    YearMonth::from_index(year, month_index)
        .and_then(|month| month.date(day))
        .map_err(|_| InviteError::InvalidCalendarDate {
            year,
            month_index,
            day,
        })
}

/// The day a user activated in the calendar, with its editable title.
///
/// This is session state owned by the caller. It is created when a day is
/// selected, edited through [`SelectedDay::set_title`], and consumed by
/// [`SelectedDay::into_request`] when the invite is generated. Dropping it
/// dismisses the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDay {
    date: NaiveDate,
    title: String,
}

impl SelectedDay {
    /// Selects a day, giving it the default title.
    ///
    /// # Errors
    ///
    /// Returns [`InviteError::InvalidCalendarDate`] if the date does not exist.
    pub fn new(year: i32, month_index: u32, day: u32) -> Result<Self, InviteError> {
        let date = resolve_date(year, month_index, day)?;
        Ok(Self {
            date,
            title: default_title(date),
        })
    }

    /// Returns the selected date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the yearless key of the selected date.
    pub fn key(&self) -> MonthDay {
        MonthDay::new(self.date.month(), self.date.day()).expect("a real date is a valid month-day")
    }

    /// Returns the current title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the title with the user's edit.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Returns the detail sentence for the selected day.
    pub fn describe(&self, tables: &AnnotationTables) -> String {
        describe_day(tables, self.key())
    }

    /// Consumes the selection into an all-day invite request.
    pub fn into_request(self) -> InviteRequest {
        InviteRequest::new(
            self.title,
            self.date.year(),
            self.date.month0(),
            self.date.day(),
        )
    }
}

/// Everything the serializer needs for one invite.
///
/// `start` and `end` default to `00:00` and `23:59`; `description` defaults
/// to the serializer's default description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteRequest {
    /// Summary line of the event.
    pub title: String,
    /// Year of the event.
    pub year: i32,
    /// Zero-based month index (0 = January).
    pub month_index: u32,
    /// Day of the month.
    pub day: u32,
    /// Local start time as `HH:MM`.
    pub start: Option<String>,
    /// Local end time as `HH:MM`.
    pub end: Option<String>,
    /// Free-text notes.
    pub description: Option<String>,
}

impl InviteRequest {
    /// Creates an all-day request with the default description.
    pub fn new(title: impl Into<String>, year: i32, month_index: u32, day: u32) -> Self {
        Self {
            title: title.into(),
            year,
            month_index,
            day,
            start: None,
            end: None,
            description: None,
        }
    }

    /// Sets the local start time.
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Sets the local end time.
    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
