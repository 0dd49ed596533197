use rungrid_core::{Point, Range};

use crate::direction::Direction;

/// Sentinel cost meaning "not yet reached".
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// The number of per-cell direction slots.
const DIR_COUNT: usize = 4;

// ---------------------------------------------------------------------------
// Internal node storage for the priority-queue search
// ---------------------------------------------------------------------------

/// Bookkeeping slot for one (cell, direction, run-length) search node.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node arena, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// RunRange
// ---------------------------------------------------------------------------

/// Central coordinator for run-constrained searches on a grid rectangle.
///
/// `RunRange` owns the node arena so that repeated queries reuse its
/// allocation. Every search node is one (cell, direction, run-length)
/// identity; cumulative cost is the value tracked per node, not part of the
/// identity. Generation counters invalidate the whole arena lazily, so each
/// query starts from a logically fresh cost table without clearing storage.
pub struct RunRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    /// Allocated run slots per (cell, direction): runs `0..=max_run`.
    pub(crate) stride: usize,
    pub(crate) generation: u32,
}

impl RunRange {
    /// Create a new `RunRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: Vec::new(),
            stride: 0,
            generation: 0,
        }
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Size the arena for run lengths `0..=max_run` and invalidate any
    /// previous search state.
    ///
    /// If the required size already fits, only the generation counter is
    /// bumped and stale entries are ignored lazily; otherwise the arena is
    /// reallocated.
    pub(crate) fn prepare(&mut self, max_run: i32) {
        let stride = max_run as usize + 1;
        let needed = self.rng.len() * DIR_COUNT * stride;
        if stride != self.stride || needed > self.nodes.len() {
            self.stride = stride;
            self.nodes.clear();
            self.nodes.resize(needed, Node::default());
            self.generation = 0;
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Flat arena index of a (cell, direction, run) node identity.
    /// Returns `None` if the cell is outside the range.
    #[inline]
    pub(crate) fn node_idx(&self, p: Point, dir: Direction, run: i32) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        let cell = y * self.width + x;
        Some((cell * DIR_COUNT + dir.index()) * self.stride + run as usize)
    }

    /// Decode an arena index back into its (cell, direction, run) identity.
    #[inline]
    pub(crate) fn node_state(&self, idx: usize) -> (Point, Direction, i32) {
        let run = (idx % self.stride) as i32;
        let rest = idx / self.stride;
        let dir = Direction::ALL[rest % DIR_COUNT];
        let cell = rest / DIR_COUNT;
        let x = (cell % self.width) as i32 + self.rng.min.x;
        let y = (cell / self.width) as i32 + self.rng.min.y;
        (Point::new(x, y), dir, run)
    }
}
