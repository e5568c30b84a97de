//! The closed set of day categories.

use std::fmt;

use serde::Serialize;

/// Category of a calendar day.
///
/// Variants are declared in strictly descending priority, so the derived
/// `Ord` sorts the highest-priority category first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Local festival day.
    Falla,
    /// Named one-off observance.
    Event,
    /// Fixed-date public holiday.
    Holiday,
    /// Saturday or Sunday with no annotation.
    Weekend,
    /// Any other day.
    Normal,
}

impl Classification {
    /// All variants, highest priority first.
    pub const PRIORITY: [Classification; 5] = [
        Classification::Falla,
        Classification::Event,
        Classification::Holiday,
        Classification::Weekend,
        Classification::Normal,
    ];

    /// Returns the lowercase identifier used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Falla => "falla",
            Classification::Event => "event",
            Classification::Holiday => "holiday",
            Classification::Weekend => "weekend",
            Classification::Normal => "normal",
        }
    }

    /// Returns `true` for the categories that come from an annotation table.
    pub fn is_annotated(self) -> bool {
        matches!(
            self,
            Classification::Falla | Classification::Event | Classification::Holiday
        )
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
