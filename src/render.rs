//! Plain-text rendering of month grids.

use calendari_calendar::WEEKDAY_HEADERS;
use calendari_classify::Classification;
use calendari_grid::{CalendarCell, MonthGrid};

/// Width of one day column, marker included.
const CELL_WIDTH: usize = 4;

/// Returns the one-character marker printed after a day number.
pub fn marker(classification: Classification) -> char {
    match classification {
        Classification::Falla => '*',
        Classification::Event => '+',
        Classification::Holiday => '!',
        Classification::Weekend => '.',
        Classification::Normal => ' ',
    }
}

/// One line explaining the markers.
pub fn legend() -> String {
    Classification::PRIORITY
        .into_iter()
        .filter(|&c| c != Classification::Normal)
        .map(|c| format!("{} {}", marker(c), c))
        .collect::<Vec<_>>()
        .join("   ")
}

/// Renders a grid as a titled weekday table followed by its notable days.
///
/// Every line, the last included, ends in `\n`.
pub fn render_month(grid: &MonthGrid) -> String {
    let width = CELL_WIDTH * WEEKDAY_HEADERS.len();
    let mut lines = Vec::with_capacity(2 + grid.rows() + grid.notable().len());
    lines.push(format!("{:^width$}", format!("{} {}", grid.name(), grid.year())));

    let header: String = WEEKDAY_HEADERS
        .iter()
        .map(|h| format!("{h:<CELL_WIDTH$}"))
        .collect();
    lines.push(header.trim_end().to_string());

    for week in grid.weeks() {
        let line: String = week.iter().map(render_cell).collect();
        lines.push(line.trim_end().to_string());
    }

    lines.extend(grid.notable().iter().map(|notable| format!("  {notable}")));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Renders one cell as `CELL_WIDTH` columns: day number and marker.
fn render_cell(cell: &CalendarCell) -> String {
    match cell {
        CalendarCell::Empty => " ".repeat(CELL_WIDTH),
        CalendarCell::Day {
            day,
            classification,
            ..
        } => format!("{day:>2}{} ", marker(*classification)),
    }
}
