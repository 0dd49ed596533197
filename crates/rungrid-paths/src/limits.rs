//! Run-length constraints.

use crate::error::{Result, SearchError};

/// Validated run-length constraints for a search.
///
/// `min_run` is the number of consecutive same-direction moves a cart must
/// have made before it may turn; `max_run` is the longest run it may make
/// without turning. Both bounds are at least 1 and `min_run <= max_run`,
/// enforced at construction so searches never re-validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunLimits {
    min_run: i32,
    max_run: i32,
}

impl RunLimits {
    /// A light cart: free to turn every cell, but overheats after 3 moves
    /// in a straight line.
    pub const LIGHT: Self = Self {
        min_run: 1,
        max_run: 3,
    };

    /// A heavy cart: needs momentum, so at least 4 cells between turns and
    /// at most 10 in a straight line.
    pub const HEAVY: Self = Self {
        min_run: 4,
        max_run: 10,
    };

    /// Create run limits, rejecting `min_run < 1` and `max_run < min_run`.
    pub fn new(min_run: i32, max_run: i32) -> Result<Self> {
        if min_run < 1 || max_run < min_run {
            return Err(SearchError::InvalidLimits { min_run, max_run });
        }
        Ok(Self { min_run, max_run })
    }

    /// Minimum run length required before a turn.
    #[inline]
    pub const fn min_run(self) -> i32 {
        self.min_run
    }

    /// Maximum permitted run length.
    #[inline]
    pub const fn max_run(self) -> i32 {
        self.max_run
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RunLimits {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            min_run: i32,
            max_run: i32,
        }
        let raw = Raw::deserialize(deserializer)?;
        RunLimits::new(raw.min_run, raw.max_run).map_err(serde::de::Error::custom)
    }
}
