//! Error types for the calendari-invite crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the calendari-invite crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InviteError {
    /// Returned when a start or end time is not a valid `HH:MM` wall-clock time.
    #[error("invalid time {input:?} (expected HH:MM, 00:00..=23:59)")]
    InvalidTimeFormat {
        /// The rejected input.
        input: String,
    },

    /// Returned when (year, month index, day) does not name a real date.
    #[error("invalid calendar date: year {year}, month index {month_index}, day {day}")]
    InvalidCalendarDate {
        /// Requested year.
        year: i32,
        /// Requested zero-based month index.
        month_index: u32,
        /// Requested day of the month.
        day: u32,
    },

    /// Returned when the end time is earlier than the start time.
    #[error("end time {end} is before start time {start}")]
    EndBeforeStart {
        /// Start time as `HH:MM`.
        start: String,
        /// End time as `HH:MM`.
        end: String,
    },

    /// Returned when a wall-clock time is skipped by a daylight-saving
    /// transition in the local timezone.
    #[error("local time {time} does not exist on {date}")]
    NonexistentLocalTime {
        /// Calendar date of the instant.
        date: NaiveDate,
        /// Wall-clock time as `HH:MM`.
        time: String,
    },
}
