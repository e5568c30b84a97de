//! Yearless annotation tables: named holidays, falla days and special events.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;

use calendari_calendar::MonthDay;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TablesError;

/// Fixed-date public holidays of the built-in calendar.
const NAMED_HOLIDAYS: [(&str, &str); 15] = [
    ("01-01", "Año Nuevo"),
    ("01-06", "Epifanía del Señor"),
    ("01-22", "San Vicente Mártir"),
    ("03-19", "San José"),
    ("04-18", "Viernes Santo"),
    ("04-21", "Lunes de Pascua"),
    ("04-28", "San Vicente Ferrer"),
    ("05-01", "Fiesta del Trabajo"),
    ("06-24", "San Juan (recuperable)"),
    ("08-15", "Asunción de la Virgen"),
    ("10-09", "Día de la Comunidad Valenciana"),
    ("11-01", "Todos los Santos"),
    ("12-06", "Día de la Constitución"),
    ("12-08", "Inmaculada Concepción"),
    ("12-25", "Navidad"),
];

/// Falla festival block of the built-in calendar.
const FALLA_DAYS: [&str; 6] = ["01-19", "03-15", "03-16", "03-17", "03-18", "03-19"];

/// Named one-off observances of the built-in calendar.
const SPECIAL_EVENTS: [(&str, &str); 4] = [
    ("01-19", "Presentación Falleras Mayores"),
    ("02-14", "San Valentín"),
    ("03-08", "Día Internacional de la Mujer"),
    ("12-31", "Nochevieja"),
];

static BUILTIN: LazyLock<AnnotationTables> = LazyLock::new(|| {
    let key = |s: &str| -> MonthDay { s.parse().expect("built-in keys are well-formed") };
    AnnotationTables {
        falla_days: FALLA_DAYS.iter().copied().map(key).collect(),
        holidays: NAMED_HOLIDAYS
            .iter()
            .map(|&(k, name)| (key(k), name.to_string()))
            .collect(),
        events: SPECIAL_EVENTS
            .iter()
            .map(|&(k, name)| (key(k), name.to_string()))
            .collect(),
    }
});

/// The three date-keyed annotation tables.
///
/// Keys carry no year: an entry applies to that month and day in every year.
/// Tables are immutable once built and can be shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnotationTables {
    #[serde(default)]
    falla_days: BTreeSet<MonthDay>,
    #[serde(default)]
    holidays: BTreeMap<MonthDay, String>,
    #[serde(default)]
    events: BTreeMap<MonthDay, String>,
}

impl AnnotationTables {
    /// Returns the built-in 2025 Valencia tables.
    ///
    /// Initialized on first use and never mutated afterwards.
    pub fn builtin() -> &'static AnnotationTables {
        &BUILTIN
    }

    /// Creates empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a falla day.
    pub fn with_falla_day(mut self, key: MonthDay) -> Self {
        self.falla_days.insert(key);
        self
    }

    /// Adds or replaces a named holiday.
    pub fn with_holiday(mut self, key: MonthDay, name: impl Into<String>) -> Self {
        self.holidays.insert(key, name.into());
        self
    }

    /// Adds or replaces a special event.
    pub fn with_event(mut self, key: MonthDay, name: impl Into<String>) -> Self {
        self.events.insert(key, name.into());
        self
    }

    /// Parses tables from TOML text.
    ///
    /// ```toml
    /// falla_days = ["03-15", "03-16"]
    ///
    /// [holidays]
    /// "12-25" = "Navidad"
    ///
    /// [events]
    /// "12-31" = "Nochevieja"
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`TablesError::Parse`] for malformed TOML, unknown fields or
    /// keys that are not valid `"MM-DD"` dates.
    pub fn from_toml_str(text: &str) -> Result<Self, TablesError> {
        let tables: Self = toml::from_str(text).map_err(|e| TablesError::Parse {
            reason: e.to_string(),
        })?;
        debug!(
            falla_days = tables.falla_days.len(),
            holidays = tables.holidays.len(),
            events = tables.events.len(),
            "parsed annotation tables"
        );
        Ok(tables)
    }

    /// Reads and parses a TOML tables file.
    ///
    /// # Errors
    ///
    /// Returns [`TablesError::Read`] if the file cannot be read and
    /// [`TablesError::Parse`] if its content is invalid.
    pub fn from_path(path: &Path) -> Result<Self, TablesError> {
        let text = std::fs::read_to_string(path).map_err(|e| TablesError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Returns `true` if `key` is a falla day.
    pub fn is_falla_day(&self, key: MonthDay) -> bool {
        self.falla_days.contains(&key)
    }

    /// Returns the special event on `key`, if any.
    pub fn event(&self, key: MonthDay) -> Option<&str> {
        self.events.get(&key).map(String::as_str)
    }

    /// Returns the named holiday on `key`, if any.
    pub fn holiday(&self, key: MonthDay) -> Option<&str> {
        self.holidays.get(&key).map(String::as_str)
    }

    /// Iterates over falla days in chronological order.
    pub fn falla_days(&self) -> impl Iterator<Item = MonthDay> + '_ {
        self.falla_days.iter().copied()
    }

    /// Iterates over holidays in chronological order.
    pub fn holidays(&self) -> impl Iterator<Item = (MonthDay, &str)> {
        self.holidays.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Iterates over special events in chronological order.
    pub fn events(&self) -> impl Iterator<Item = (MonthDay, &str)> {
        self.events.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
