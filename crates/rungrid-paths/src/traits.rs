use rungrid_core::{Heat, HeatGrid, Point, Range};

/// A field of per-cell entry costs that searches can route over.
pub trait HeatPather {
    /// Bounding rectangle of traversable cells.
    fn bounds(&self) -> Range;

    /// Cost of entering `p`, or `None` if `p` is not traversable.
    fn heat(&self, p: Point) -> Option<i32>;

    /// Smallest entry cost anywhere in the field.
    ///
    /// Searches only use a distance heuristic when this is at least 1;
    /// otherwise the estimate could overestimate and they fall back to
    /// plain Dijkstra.
    fn min_heat(&self) -> i32;
}

impl HeatPather for HeatGrid {
    fn bounds(&self) -> Range {
        self.bounds()
    }

    fn heat(&self, p: Point) -> Option<i32> {
        self.at(p).map(Heat::value)
    }

    fn min_heat(&self) -> i32 {
        self.min_heat()
    }
}
