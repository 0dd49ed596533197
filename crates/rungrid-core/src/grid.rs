//! The [`HeatGrid`] type — an immutable rectangular grid of entry costs.
//!
//! A grid is built once from parsed input and never mutated afterwards, so it
//! owns plain storage and can be shared freely across threads.

use thiserror::Error;

use crate::geom::{Point, Range};

/// Cost ("heat") of entering a single cell. Always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heat(pub i32);

impl Heat {
    /// Create a new heat value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the underlying integer value.
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for Heat {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

impl From<Heat> for i32 {
    fn from(h: Heat) -> Self {
        h.0
    }
}

/// Rejection reasons for malformed grid data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The input had no rows, or a zero dimension.
    #[error("grid has no cells")]
    Empty,
    /// A row's length differs from the first row's.
    #[error("row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A cell carried a negative entry cost.
    #[error("negative heat at {at}")]
    NegativeHeat { at: Point },
}

/// An immutable 2D grid of [`Heat`] entry costs.
///
/// The minimum entry cost is computed at construction; searches use it to
/// decide whether a distance-based heuristic is admissible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatGrid {
    cells: Vec<Heat>,
    bounds: Range,
    min_heat: i32,
}

impl HeatGrid {
    /// Build a grid from row-major cost rows.
    ///
    /// Rejects empty input, ragged rows and negative costs.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        let mut min_heat = i32::MAX;
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: y,
                    len: row.len(),
                    expected: width,
                });
            }
            for (x, &cost) in row.iter().enumerate() {
                if cost < 0 {
                    return Err(GridError::NegativeHeat {
                        at: Point::new(x as i32, y as i32),
                    });
                }
                min_heat = min_heat.min(cost);
                cells.push(Heat::new(cost));
            }
        }

        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width as i32, height as i32),
            min_heat,
        })
    }

    /// Build a grid by evaluating `f` at every point of a `width` × `height`
    /// rectangle anchored at the origin.
    pub fn from_fn(
        width: i32,
        height: i32,
        f: impl Fn(Point) -> i32,
    ) -> Result<Self, GridError> {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        if bounds.is_empty() {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(bounds.len());
        let mut min_heat = i32::MAX;
        for p in bounds.iter() {
            let cost = f(p);
            if cost < 0 {
                return Err(GridError::NegativeHeat { at: p });
            }
            min_heat = min_heat.min(cost);
            cells.push(Heat::new(cost));
        }

        Ok(Self {
            cells,
            bounds,
            min_heat,
        })
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Entry cost of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Heat> {
        if !self.bounds.contains(p) {
            return None;
        }
        let idx = (p.y as usize) * (self.bounds.width() as usize) + p.x as usize;
        Some(self.cells[idx])
    }

    /// The smallest entry cost anywhere in the grid.
    #[inline]
    pub fn min_heat(&self) -> i32 {
        self.min_heat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_indexes_row_major() {
        let g = HeatGrid::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert_eq!(g.at(Point::new(0, 0)), Some(Heat::new(1)));
        assert_eq!(g.at(Point::new(2, 0)), Some(Heat::new(3)));
        assert_eq!(g.at(Point::new(1, 1)), Some(Heat::new(5)));
        assert_eq!(g.at(Point::new(3, 0)), None);
        assert_eq!(g.at(Point::new(0, 2)), None);
        assert_eq!(g.at(Point::new(-1, 0)), None);
        assert_eq!(g.min_heat(), 1);
    }

    #[test]
    fn from_rows_rejects_empty() {
        assert_eq!(HeatGrid::from_rows(&[]), Err(GridError::Empty));
        assert_eq!(HeatGrid::from_rows(&[vec![]]), Err(GridError::Empty));
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = HeatGrid::from_rows(&[vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn from_rows_rejects_negative() {
        let err = HeatGrid::from_rows(&[vec![1, 2], vec![3, -4]]).unwrap_err();
        assert_eq!(
            err,
            GridError::NegativeHeat {
                at: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn from_fn_uniform() {
        let g = HeatGrid::from_fn(4, 4, |_| 7).unwrap();
        assert_eq!(g.bounds().len(), 16);
        assert_eq!(g.min_heat(), 7);
        assert_eq!(g.at(Point::new(3, 3)), Some(Heat::new(7)));
    }

    #[test]
    fn from_fn_rejects_zero_dimension() {
        assert_eq!(
            HeatGrid::from_fn(0, 5, |_| 1).unwrap_err(),
            GridError::Empty
        );
    }

    #[test]
    fn min_heat_sees_zero_cells() {
        let g = HeatGrid::from_rows(&[vec![3, 0], vec![2, 9]]).unwrap();
        assert_eq!(g.min_heat(), 0);
    }
}
