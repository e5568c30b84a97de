//! Month command: one grid with its notable days.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use calendari_calendar::YearMonth;
use calendari_grid::build_month;

use crate::cli::MonthArgs;
use crate::config::CalendariConfig;
use crate::convert;
use crate::render::{legend, render_month};

/// Print one month as text or JSON.
pub fn run(
    config: &CalendariConfig,
    year: i32,
    args: MonthArgs,
    out: &mut impl Write,
) -> Result<()> {
    let _cmd = info_span!("month").entered();
    let tables = convert::build_tables(config)?;
    let month = YearMonth::new(year, args.month)
        .with_context(|| format!("invalid month {year}-{:02}", args.month))?;

    let grid = build_month(&tables, month);
    info!(
        year,
        month = args.month,
        notable = grid.notable().len(),
        "month grid built"
    );

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &grid).context("failed to write JSON")?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_month(&grid))?;
        writeln!(out, "{}", legend())?;
    }
    Ok(())
}
