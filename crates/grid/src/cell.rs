//! Grid cells and the month grid they form.

use std::fmt;

use calendari_calendar::DAYS_PER_WEEK;
use calendari_classify::Classification;
use serde::Serialize;

/// One cell of a Monday-first month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarCell {
    /// Padding before day 1.
    Empty,
    /// A day of the month.
    Day {
        /// Day of the month (1..=31).
        day: u32,
        /// Monday-based weekday index, equal to the cell's column.
        weekday: u32,
        /// Highest-priority category of the day.
        classification: Classification,
        /// Folded annotation text.
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

impl CalendarCell {
    /// Returns `true` for padding cells.
    pub fn is_empty(&self) -> bool {
        matches!(self, CalendarCell::Empty)
    }

    /// Day of the month, or `None` for padding.
    pub fn day(&self) -> Option<u32> {
        match self {
            CalendarCell::Day { day, .. } => Some(*day),
            CalendarCell::Empty => None,
        }
    }

    /// Category of the day, or `None` for padding.
    pub fn classification(&self) -> Option<Classification> {
        match self {
            CalendarCell::Day { classification, .. } => Some(*classification),
            CalendarCell::Empty => None,
        }
    }

    /// Annotation text of the day, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            CalendarCell::Day { label, .. } => label.as_deref(),
            CalendarCell::Empty => None,
        }
    }
}

/// A day of the month that carries a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotableDay {
    /// Day of the month.
    pub day: u32,
    /// Folded annotation text.
    pub label: String,
}

impl fmt::Display for NotableDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.day, self.label)
    }
}

/// Cells and notable days of one month.
///
/// `cells` holds the leading padding followed by one cell per day; there is
/// no trailing padding. `notable` is ascending by day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) name: &'static str,
    pub(crate) cells: Vec<CalendarCell>,
    pub(crate) notable: Vec<NotableDay>,
}

impl MonthGrid {
    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the zero-based month index (0..=11).
    pub fn month_index(&self) -> u32 {
        self.month - 1
    }

    /// Returns the month name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns all cells, padding first.
    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// Returns the labelled days in ascending order.
    pub fn notable(&self) -> &[NotableDay] {
        &self.notable
    }

    /// Number of padding cells before day 1.
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_empty()).count()
    }

    /// Number of days in the month.
    pub fn days(&self) -> usize {
        self.cells.len() - self.leading_blanks()
    }

    /// Number of rows the month occupies in a 7-column grid.
    pub fn rows(&self) -> usize {
        self.cells.len().div_ceil(DAYS_PER_WEEK as usize)
    }

    /// Iterates over week rows; the last row may be shorter than 7.
    pub fn weeks(&self) -> std::slice::Chunks<'_, CalendarCell> {
        self.cells.chunks(DAYS_PER_WEEK as usize)
    }
}
