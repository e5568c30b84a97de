//! A validated Gregorian (year, month) pair.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::CalendarError;
use crate::month_day::MonthDay;
use crate::weekday::weekday_of;

/// A month of a specific proleptic-Gregorian year.
///
/// Holds the first day of the month and the month length, both computed once
/// at construction, so every accessor is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
    days: u32,
}

impl YearMonth {
    /// Creates a `YearMonth` from a year and a month number (1..=12).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::UnsupportedYear`] if the month lies outside
    /// the representable date range.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let first =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::UnsupportedYear { year })?;
        let next = first
            .checked_add_months(Months::new(1))
            .ok_or(CalendarError::UnsupportedYear { year })?;
        let days = (next - first).num_days() as u32;
        Ok(Self { first, days })
    }

    /// Creates a `YearMonth` from a year and a zero-based month index
    /// (0 = January ... 11 = December).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonthIndex`] if `index` is not in 0..=11.
    pub fn from_index(year: i32, index: u32) -> Result<Self, CalendarError> {
        if index > 11 {
            return Err(CalendarError::InvalidMonthIndex { index });
        }
        Self::new(year, index + 1)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.first.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.first.month()
    }

    /// Returns the zero-based month index (0..=11).
    pub fn index(self) -> u32 {
        self.month() - 1
    }

    /// Returns the number of days in the month, leap February included.
    pub fn days_in_month(self) -> u32 {
        self.days
    }

    /// Returns the first day of the month.
    pub fn first_day(self) -> NaiveDate {
        self.first
    }

    /// Returns the Monday-based weekday index of day 1, which is also the
    /// number of blank cells before it in a Monday-first grid.
    pub fn first_weekday(self) -> u32 {
        weekday_of(self.first)
    }

    /// Returns the date of `day` within this month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] if `day` is not in
    /// `1..=days_in_month()`.
    pub fn date(self, day: u32) -> Result<NaiveDate, CalendarError> {
        if !(1..=self.days).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month: self.month(),
                max_day: self.days,
            });
        }
        Ok(self.first + chrono::Days::new(u64::from(day - 1)))
    }

    /// Returns the yearless key of `day` within this month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] if `day` is not in
    /// `1..=days_in_month()`.
    pub fn month_day(self, day: u32) -> Result<MonthDay, CalendarError> {
        self.date(day)?;
        MonthDay::new(self.month(), day)
    }

    /// Iterates over every date of the month in order.
    pub fn dates(self) -> impl Iterator<Item = NaiveDate> {
        self.first.iter_days().take(self.days as usize)
    }
}
