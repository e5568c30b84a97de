//! Yearless `"MM-DD"` date keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Longest possible length of each month in any year (index 0 unused,
/// index 1 = January, ..., index 12 = December). February allows the leap day.
pub(crate) const MAX_DAYS_PER_MONTH: [u32; 13] =
    [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A calendar date without a year, keyed as `"MM-DD"`.
///
/// The same annotation applies to a `MonthDay` every year. Ordering is
/// chronological within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Creates a new `MonthDay` from a month (1..=12) and a day.
    ///
    /// The day must exist in that month in at least one year, so `(2, 29)`
    /// is accepted while `(2, 30)` and `(4, 31)` are not.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the month.
    pub fn new(month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = MAX_DAYS_PER_MONTH[month as usize];
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self {
            month: month as u8,
            day: day as u8,
        })
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        u32::from(self.month)
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        u32::from(self.day)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidMonthDayKey { key: s.to_string() };

        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b'-' {
            return Err(invalid());
        }
        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }
        let month = u32::from(digits[0] - b'0') * 10 + u32::from(digits[1] - b'0');
        let day = u32::from(digits[2] - b'0') * 10 + u32::from(digits[3] - b'0');
        Self::new(month, day)
    }
}

impl TryFrom<String> for MonthDay {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(value: MonthDay) -> Self {
        value.to_string()
    }
}
