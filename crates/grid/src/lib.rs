//! # calendari-grid
//!
//! Builds Monday-first month grids for the wall calendar.
//!
//! A [`MonthGrid`] holds `s` leading [`CalendarCell::Empty`] cells, where
//! `s` is the Monday-based weekday of day 1, followed by one classified
//! [`CalendarCell::Day`] per day of the month, plus the ascending list of
//! [`NotableDay`]s (days with a label).
//!
//! ```
//! use calendari_calendar::YearMonth;
//! use calendari_classify::AnnotationTables;
//! use calendari_grid::build_month;
//!
//! let march = YearMonth::from_index(2025, 2).unwrap();
//! let grid = build_month(AnnotationTables::builtin(), march);
//! assert_eq!(grid.cells().len(), 5 + 31); // March 2025 starts on a Saturday
//! assert_eq!(grid.notable()[0].to_string(), "8: Día Internacional de la Mujer");
//! ```
//!
//! Grids are rebuilt from scratch for every request; cells are never
//! mutated after construction.

mod build;
mod cell;

pub use build::{build_month, build_year};
pub use cell::{CalendarCell, MonthGrid, NotableDay};
