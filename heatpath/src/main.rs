//! Command-line heat routing over digit maps.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rungrid_paths::RunLimits;

use heatpath_lib::{corner_route, input, solve};

/// Route a cart across a heat grid read from a digit map.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the digit map, one row of digits per line.
    input: PathBuf,

    /// Minimum run length before a turn (use with --max-run).
    #[arg(long, requires = "max_run")]
    min_run: Option<i32>,

    /// Maximum run length (use with --min-run).
    #[arg(long, requires = "min_run")]
    max_run: Option<i32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    if let (Some(min_run), Some(max_run)) = (cli.min_run, cli.max_run) {
        let limits = RunLimits::new(min_run, max_run)?;
        let grid = input::parse_grid(&text)?;
        println!("{}", corner_route(&grid, limits)?);
    } else {
        let (light, heavy) = solve(&text)?;
        println!("light cart: {light}");
        println!("heavy cart: {heavy}");
    }
    Ok(())
}
