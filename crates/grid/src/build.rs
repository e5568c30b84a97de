//! Month and year grid construction.

use calendari_calendar::{CalendarError, MONTH_NAMES, YearMonth};
use calendari_classify::{AnnotationTables, classify_date};
use tracing::debug;

use crate::cell::{CalendarCell, MonthGrid, NotableDay};

/// Builds the grid of one month.
///
/// Emits one [`CalendarCell::Empty`] per weekday column before day 1, then
/// one classified [`CalendarCell::Day`] per day. Every labelled day is also
/// listed in [`MonthGrid::notable`].
#[tracing::instrument(skip_all, fields(year = month.year(), month = month.month()))]
pub fn build_month(tables: &AnnotationTables, month: YearMonth) -> MonthGrid {
    let blanks = month.first_weekday() as usize;
    let total_days = month.days_in_month() as usize;

    let mut cells = Vec::with_capacity(blanks + total_days);
    cells.resize(blanks, CalendarCell::Empty);
    let mut notable = Vec::new();

    for (date, day) in month.dates().zip(1..) {
        let info = classify_date(tables, date);
        if let Some(label) = &info.label {
            notable.push(NotableDay {
                day,
                label: label.clone(),
            });
        }
        cells.push(CalendarCell::Day {
            day,
            weekday: info.weekday,
            classification: info.classification,
            label: info.label,
        });
    }

    debug!(blanks, total_days, notable = notable.len(), "built month grid");
    MonthGrid {
        year: month.year(),
        month: month.month(),
        name: MONTH_NAMES[month.index() as usize],
        cells,
        notable,
    }
}

/// Builds the twelve month grids of `year`, January first.
///
/// # Errors
///
/// Returns [`CalendarError::UnsupportedYear`] if the year lies outside the
/// representable date range.
pub fn build_year(tables: &AnnotationTables, year: i32) -> Result<Vec<MonthGrid>, CalendarError> {
    (0..12)
        .map(|index| YearMonth::from_index(year, index).map(|m| build_month(tables, m)))
        .collect()
}
