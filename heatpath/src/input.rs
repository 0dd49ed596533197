//! Line-oriented digit-map parsing.
//!
//! A map is one row of cells per line, each cell a single decimal digit
//! giving the heat cost of entering it. Blank lines are ignored.

use anyhow::{Context, Result};
use rungrid_core::HeatGrid;

/// Parse a digit map into a [`HeatGrid`].
pub fn parse_grid(text: &str) -> Result<HeatGrid> {
    let mut rows = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let mut row = Vec::with_capacity(line.len());
        for c in line.chars() {
            let digit = c
                .to_digit(10)
                .with_context(|| format!("line {}: invalid cell {c:?}", lineno + 1))?;
            row.push(digit as i32);
        }
        rows.push(row);
    }
    HeatGrid::from_rows(&rows).context("malformed grid")
}
