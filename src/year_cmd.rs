//! Year command: all twelve month grids.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use calendari_grid::build_year;

use crate::cli::YearArgs;
use crate::config::CalendariConfig;
use crate::convert;
use crate::render::{legend, render_month};

/// Print the whole year as text or JSON.
pub fn run(
    config: &CalendariConfig,
    year: i32,
    args: YearArgs,
    out: &mut impl Write,
) -> Result<()> {
    let _cmd = info_span!("year").entered();
    let tables = convert::build_tables(config)?;
    let grids = build_year(&tables, year).with_context(|| format!("invalid year {year}"))?;
    info!(
        year,
        notable = grids.iter().map(|g| g.notable().len()).sum::<usize>(),
        "year grids built"
    );

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &grids).context("failed to write JSON")?;
        writeln!(out)?;
        return Ok(());
    }
    for grid in &grids {
        writeln!(out, "{}", render_month(grid))?;
    }
    writeln!(out, "{}", legend())?;
    Ok(())
}
