//! Heatpath — route carts across heat grids parsed from digit maps.

pub mod input;

use anyhow::Result;
use rungrid_core::{HeatGrid, Point};
use rungrid_paths::{RunLimits, RunRange};

/// Minimum total heat from the top-left to the bottom-right cell of `grid`.
pub fn corner_route(grid: &HeatGrid, limits: RunLimits) -> Result<i32> {
    let mut range = RunRange::new(grid.bounds());
    let to = Point::new(grid.width() - 1, grid.height() - 1);
    Ok(range.route(grid, Point::ZERO, to, limits)?)
}

/// Parse a digit map and route both stock cart configurations corner to
/// corner. Returns the (light, heavy) costs.
pub fn solve(text: &str) -> Result<(i32, i32)> {
    let grid = input::parse_grid(text)?;
    let mut range = RunRange::new(grid.bounds());
    let to = Point::new(grid.width() - 1, grid.height() - 1);
    let light = range.route(&grid, Point::ZERO, to, RunLimits::LIGHT)?;
    let heavy = range.route(&grid, Point::ZERO, to, RunLimits::HEAVY)?;
    Ok((light, heavy))
}
