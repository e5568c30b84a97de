//! Error types for the calendari-calendar crate.

/// Error type for all fallible operations in the calendari-calendar crate.
///
/// This enum covers validation failures for month numbers, zero-based month
/// indices, day-within-month values, out-of-range years and `"MM-DD"` key
/// parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a zero-based month index is outside 0..=11.
    #[error("invalid month index: {index} (must be 0..=11)")]
    InvalidMonthIndex {
        /// The invalid month index that was provided.
        index: u32,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u32,
        /// The month for which the day is invalid.
        month: u32,
        /// The maximum valid day for the given month.
        max_day: u32,
    },

    /// Returned when a month falls outside the representable date range.
    #[error("unsupported year: {year}")]
    UnsupportedYear {
        /// The year that could not be represented.
        year: i32,
    },

    /// Returned when a string is not a well-formed `"MM-DD"` key.
    #[error("invalid month-day key: {key:?} (expected \"MM-DD\")")]
    InvalidMonthDayKey {
        /// The rejected input.
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_month_index() {
        let err = CalendarError::InvalidMonthIndex { index: 12 };
        assert_eq!(err.to_string(), "invalid month index: 12 (must be 0..=11)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 31,
            month: 4,
            max_day: 30,
        };
        assert_eq!(err.to_string(), "invalid day: 31 for month 4 (max 30)");
    }

    #[test]
    fn error_unsupported_year() {
        let err = CalendarError::UnsupportedYear { year: 300_000 };
        assert_eq!(err.to_string(), "unsupported year: 300000");
    }

    #[test]
    fn error_invalid_key() {
        let err = CalendarError::InvalidMonthDayKey {
            key: "1-19".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid month-day key: \"1-19\" (expected \"MM-DD\")"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
