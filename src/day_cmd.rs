//! Day command: classification and detail message of one date.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info_span;

use calendari_calendar::{MonthDay, WEEKDAY_HEADERS, YearMonth};
use calendari_classify::{classify_date, describe_day};

use crate::cli::DayArgs;
use crate::config::CalendariConfig;
use crate::convert;

/// Print what the calendar shows for one date.
pub fn run(config: &CalendariConfig, year: i32, args: DayArgs, out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("day").entered();
    let tables = convert::build_tables(config)?;
    let date = YearMonth::new(year, args.month)
        .and_then(|m| m.date(args.day))
        .with_context(|| format!("invalid date {year}-{:02}-{:02}", args.month, args.day))?;

    let info = classify_date(&tables, date);
    let key = MonthDay::new(args.month, args.day)?;
    writeln!(out, "{}", describe_day(&tables, key))?;
    writeln!(out, "date: {date} ({})", WEEKDAY_HEADERS[info.weekday as usize])?;
    writeln!(out, "classification: {}", info.classification)?;
    if let Some(label) = &info.label {
        writeln!(out, "label: {label}")?;
    }
    Ok(())
}
