//! Spanish month and weekday names used by the wall calendar.

use crate::error::CalendarError;

/// Month names, index 0 = January.
pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Two-letter weekday headers for a Monday-first grid, index 0 = Monday.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Lu", "Ma", "Mi", "Ju", "Vi", "Sá", "Do"];

/// Returns the name of the month with zero-based `index`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonthIndex`] if `index` is not in 0..=11.
pub fn month_name(index: u32) -> Result<&'static str, CalendarError> {
    MONTH_NAMES
        .get(index as usize)
        .copied()
        .ok_or(CalendarError::InvalidMonthIndex { index })
}
