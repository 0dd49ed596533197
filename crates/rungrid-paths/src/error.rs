//! Error types for run-constrained searches.

use rungrid_core::Point;
use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Failures reported by [`RunRange::route`](crate::RunRange::route).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Run limits outside the legal envelope (`1 <= min_run <= max_run`).
    #[error("invalid run limits: min_run {min_run}, max_run {max_run}")]
    InvalidLimits { min_run: i32, max_run: i32 },

    /// Start or destination outside the searched range.
    #[error("point {0} is outside the search range")]
    OutOfBounds(Point),

    /// The frontier emptied without reaching the destination.
    #[error("no route to the destination satisfies the run limits")]
    NoRoute,
}
