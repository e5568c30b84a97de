//! Priority classification and label folding.
//!
//! Both operations start from the same three independent table lookups
//! ([`Annotations`]). Classification keeps only the highest-priority match;
//! the label folds every match into one string:
//!
//! | Falla | Event | Holiday | Classification | Label |
//! |-------|-------|---------|----------------|-------|
//! | yes | `e` | `h` | `Falla` | `Falla – e (Festivo: h)` |
//! | no | `e` | `h` | `Event` | `e (Festivo: h)` |
//! | no | no | `h` | `Holiday` | `h` |
//! | no | no | no | `Weekend` / `Normal` | none |

use calendari_calendar::{MONTH_NAMES, MonthDay, is_weekend, weekday_of};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::trace;

use crate::classification::Classification;
use crate::tables::AnnotationTables;

/// Label text and primary name of a falla day.
pub const FALLA_LABEL: &str = "Falla";

/// The outcome of looking one key up in all three tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotations<'a> {
    /// `key` is a falla day.
    pub falla: bool,
    /// Special event on `key`.
    pub event: Option<&'a str>,
    /// Named holiday on `key`.
    pub holiday: Option<&'a str>,
}

impl<'a> Annotations<'a> {
    /// Looks `key` up in every table. Absence is not an error.
    pub fn lookup(tables: &'a AnnotationTables, key: MonthDay) -> Self {
        Self {
            falla: tables.is_falla_day(key),
            event: tables.event(key),
            holiday: tables.holiday(key),
        }
    }

    /// Returns `true` if no table matched.
    pub fn is_empty(&self) -> bool {
        !self.falla && self.event.is_none() && self.holiday.is_none()
    }

    /// Applies the priority rule; the first matching tier wins.
    pub fn classification(&self, weekday: u32) -> Classification {
        if self.falla {
            Classification::Falla
        } else if self.event.is_some() {
            Classification::Event
        } else if self.holiday.is_some() {
            Classification::Holiday
        } else if is_weekend(weekday) {
            Classification::Weekend
        } else {
            Classification::Normal
        }
    }

    /// Name of the highest-priority matching table entry.
    pub fn primary_name(&self) -> Option<&'a str> {
        if self.falla {
            Some(FALLA_LABEL)
        } else {
            self.event.or(self.holiday)
        }
    }

    /// Folds all matches into the label text.
    pub fn label(&self) -> Option<String> {
        let mut text = if self.falla {
            let mut text = FALLA_LABEL.to_string();
            if let Some(event) = self.event {
                text.push_str(" – ");
                text.push_str(event);
            }
            text
        } else if let Some(event) = self.event {
            event.to_string()
        } else {
            // Holiday alone takes no suffix.
            return self.holiday.map(str::to_string);
        };
        if let Some(holiday) = self.holiday {
            text.push_str(" (Festivo: ");
            text.push_str(holiday);
            text.push(')');
        }
        Some(text)
    }
}

/// Classification of one key plus the name that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict<'a> {
    /// Highest-priority category that applies.
    pub classification: Classification,
    /// `"Falla"`, the event name or the holiday name; absent for
    /// `Weekend` and `Normal`.
    pub primary_name: Option<&'a str>,
}

/// Classifies `key` falling on the Monday-based `weekday`.
pub fn classify(tables: &AnnotationTables, key: MonthDay, weekday: u32) -> Verdict<'_> {
    let annotations = Annotations::lookup(tables, key);
    Verdict {
        classification: annotations.classification(weekday),
        primary_name: annotations.primary_name(),
    }
}

/// Composes the label text of `key`, or `None` when no table matches.
///
/// The label is independent of the weekday.
pub fn compose_label(tables: &AnnotationTables, key: MonthDay) -> Option<String> {
    Annotations::lookup(tables, key).label()
}

/// A fully classified calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayInfo {
    /// Yearless key of the date.
    pub key: MonthDay,
    /// Monday-based weekday index (0 = Monday).
    pub weekday: u32,
    /// Highest-priority category.
    pub classification: Classification,
    /// Folded label text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Classifies a concrete date.
pub fn classify_date(tables: &AnnotationTables, date: NaiveDate) -> DayInfo {
    let key = MonthDay::new(date.month(), date.day()).expect("a real date is a valid month-day");
    let weekday = weekday_of(date);
    let annotations = Annotations::lookup(tables, key);
    let info = DayInfo {
        key,
        weekday,
        classification: annotations.classification(weekday),
        label: annotations.label(),
    };
    trace!(%key, weekday, classification = %info.classification, "classified day");
    info
}

/// Builds the detail sentence shown when a day is selected, for example
/// `"Fecha: 19 de Enero. Evento: Falla – Presentación Falleras Mayores"`.
pub fn describe_day(tables: &AnnotationTables, key: MonthDay) -> String {
    let month = MONTH_NAMES[(key.month() - 1) as usize];
    let mut message = format!("Fecha: {} de {}.", key.day(), month);
    let annotations = Annotations::lookup(tables, key);
    if let Some(label) = annotations.label() {
        if annotations.falla || annotations.event.is_some() {
            message.push_str(" Evento: ");
        } else {
            message.push_str(" Festivo: ");
        }
        message.push_str(&label);
    }
    message
}
