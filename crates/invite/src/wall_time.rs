//! `HH:MM` wall-clock times.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;

use crate::error::InviteError;

/// A local wall-clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallTime {
    hour: u32,
    minute: u32,
}

impl WallTime {
    /// Start of an all-day invite.
    pub const START_OF_DAY: WallTime = WallTime { hour: 0, minute: 0 };

    /// End of an all-day invite.
    pub const END_OF_DAY: WallTime = WallTime {
        hour: 23,
        minute: 59,
    };

    /// Creates a `WallTime`, or `None` if out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u32 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u32 {
        self.minute
    }

    /// Converts to a [`NaiveTime`] with zero seconds.
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).expect("WallTime is always in range")
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for WallTime {
    type Err = InviteError;

    /// Parses `H:MM` or `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InviteError::InvalidTimeFormat {
            input: s.to_string(),
        };
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !(1..=2).contains(&hour.len()) || minute.len() != 2 {
            return Err(invalid());
        }
        if !all_digits(hour) || !all_digits(minute) {
            return Err(invalid());
        }
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).ok_or_else(invalid)
    }
}
