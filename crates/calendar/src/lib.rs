//! # calendari-calendar
//!
//! Date primitives shared by the wall-calendar crates.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["YearMonth::from_index(year, 0..=11)"] -->|".first_weekday()"| B["leading blanks"]
//!     A -->|".days_in_month()"| C["1..=28/29/30/31"]
//!     A -->|".month_day(day)"| D["MonthDay \"MM-DD\""]
//!     E["NaiveDate"] -->|"weekday_of()"| F["Monday-based index"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use calendari_calendar::{MonthDay, YearMonth, is_weekend, monday_index};
//!
//! let feb = YearMonth::from_index(2024, 1).unwrap();
//! assert_eq!(feb.days_in_month(), 29);
//!
//! let key: MonthDay = "12-25".parse().unwrap();
//! assert_eq!(key.to_string(), "12-25");
//!
//! assert_eq!(monday_index(0), 6); // Sunday
//! assert!(is_weekend(5));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month_day` | Yearless `"MM-DD"` keys |
//! | `year_month` | Validated Gregorian month with length and first weekday |
//! | `weekday` | Sunday-based to Monday-based weekday transform |
//! | `names` | Spanish month and weekday names |
//! | `error` | Error types |

mod error;
mod month_day;
mod names;
mod weekday;
mod year_month;

pub use error::CalendarError;
pub use month_day::MonthDay;
pub use names::{MONTH_NAMES, WEEKDAY_HEADERS, month_name};
pub use weekday::{DAYS_PER_WEEK, is_weekend, monday_index, sunday_index, weekday_of};
pub use year_month::YearMonth;
