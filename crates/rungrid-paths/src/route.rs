use std::collections::BinaryHeap;

use rungrid_core::Point;

use crate::direction::Direction;
use crate::distance::manhattan;
use crate::error::{Result, SearchError};
use crate::limits::RunLimits;
use crate::runrange::{NodeRef, RunRange, UNREACHABLE};
use crate::traits::HeatPather;

impl RunRange {
    /// Compute the minimum total heat of a run-constrained route from
    /// `from` to `to` over `field`.
    ///
    /// Movement follows the cart model: from any state the candidate next
    /// moves are straight ahead, left and right (never the reverse).
    /// Continuing straight extends the current run by one and is legal only
    /// while the run stays within `limits.max_run()`; turning resets the run
    /// to 1 and is legal only once the current run has reached
    /// `limits.min_run()`. The start cell has no incoming direction, so one
    /// run-0 state per direction is seeded at cost 0; a run-0 state cannot
    /// turn, so each seed commits to its own first move.
    ///
    /// Returns the cumulative cost of the first finalized state at `to`
    /// (any arrival direction and run length count), [`SearchError::NoRoute`]
    /// if the frontier empties first, or [`SearchError::OutOfBounds`] if an
    /// endpoint lies outside the searched range or the field.
    pub fn route<F: HeatPather>(
        &mut self,
        field: &F,
        from: Point,
        to: Point,
        limits: RunLimits,
    ) -> Result<i32> {
        let bounds = field.bounds();
        if !self.rng.contains(from) || !bounds.contains(from) {
            return Err(SearchError::OutOfBounds(from));
        }
        if !self.rng.contains(to) || !bounds.contains(to) {
            return Err(SearchError::OutOfBounds(to));
        }

        // The destination check precedes any move, so a degenerate query
        // costs nothing regardless of the limits.
        if from == to {
            return Ok(0);
        }

        self.prepare(limits.max_run());
        let cur_gen = self.generation;

        // Manhattan distance is admissible and consistent only while every
        // step costs at least 1; with zero-cost cells present, run as plain
        // Dijkstra instead.
        let h_unit = if field.min_heat() >= 1 { 1 } else { 0 };
        let estimate = move |p: Point| h_unit * manhattan(p, to);

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

        for dir in Direction::ALL {
            let Some(si) = self.node_idx(from, dir, 0) else {
                continue;
            };
            let node = &mut self.nodes[si];
            node.g = 0;
            node.generation = cur_gen;
            node.open = true;
            open.push(NodeRef {
                idx: si,
                f: estimate(from),
            });
        }

        let mut expanded = 0usize;

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            let (cp, cdir, crun) = self.node_state(ci);
            let current_g = self.nodes[ci].g;

            if cp == to {
                log::debug!(
                    "route {from} -> {to} cost {current_g}, {expanded} nodes expanded"
                );
                return Ok(current_g);
            }

            self.nodes[ci].open = false;
            expanded += 1;

            for next in cdir.turns() {
                let straight = next == cdir;
                let new_run = if straight { crun + 1 } else { 1 };
                if straight && new_run > limits.max_run() {
                    continue;
                }
                if !straight && crun < limits.min_run() {
                    continue;
                }

                let np = cp + next.delta();
                let Some(cost) = field.heat(np) else {
                    continue;
                };
                let Some(ni) = self.node_idx(np, next, new_run) else {
                    continue;
                };

                let tentative = current_g + cost;
                let node = &mut self.nodes[ni];
                if node.generation == cur_gen {
                    if tentative >= node.g {
                        continue;
                    }
                } else {
                    node.generation = cur_gen;
                    node.g = UNREACHABLE;
                }

                node.g = tentative;
                node.open = true;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative + estimate(np),
                });
            }
        }

        log::debug!(
            "route {from} -> {to} exhausted the frontier, {expanded} nodes expanded"
        );
        Err(SearchError::NoRoute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rungrid_core::HeatGrid;

    /// 13×13 benchmark field of single-digit costs.
    const BENCHMARK: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";

    fn grid(text: &str) -> HeatGrid {
        let rows: Vec<Vec<i32>> = text
            .lines()
            .map(|line| {
                line.chars()
                    .map(|c| c.to_digit(10).unwrap() as i32)
                    .collect()
            })
            .collect();
        HeatGrid::from_rows(&rows).unwrap()
    }

    fn corner_route(g: &HeatGrid, limits: RunLimits) -> Result<i32> {
        let mut rr = RunRange::new(g.bounds());
        let to = Point::new(g.width() - 1, g.height() - 1);
        rr.route(g, Point::ZERO, to, limits)
    }

    fn transposed(text: &str) -> String {
        let rows: Vec<&str> = text.lines().collect();
        let mut out = Vec::new();
        for x in 0..rows[0].len() {
            let col: String = rows
                .iter()
                .map(|r| r.as_bytes()[x] as char)
                .collect();
            out.push(col);
        }
        out.join("\n")
    }

    #[test]
    fn benchmark_light_cart() {
        assert_eq!(corner_route(&grid(BENCHMARK), RunLimits::LIGHT), Ok(102));
    }

    #[test]
    fn benchmark_heavy_cart() {
        assert_eq!(corner_route(&grid(BENCHMARK), RunLimits::HEAVY), Ok(94));
    }

    #[test]
    fn uniform_grid_costs_manhattan_distance() {
        // A staircase path stays within every run limit, so the optimum is
        // the Manhattan distance times the uniform entry cost.
        let g = HeatGrid::from_fn(4, 4, |_| 1).unwrap();
        assert_eq!(corner_route(&g, RunLimits::LIGHT), Ok(6));

        let g = HeatGrid::from_fn(5, 3, |_| 2).unwrap();
        assert_eq!(corner_route(&g, RunLimits::LIGHT), Ok(12));
    }

    #[test]
    fn single_cell_route_is_free() {
        let g = HeatGrid::from_fn(1, 1, |_| 9).unwrap();
        assert_eq!(corner_route(&g, RunLimits::LIGHT), Ok(0));
        // The destination check precedes any move, so min_run never applies.
        assert_eq!(corner_route(&g, RunLimits::HEAVY), Ok(0));
    }

    #[test]
    fn min_run_can_make_destination_unreachable() {
        // A 2×2 grid leaves no room for the 4-cell runs a heavy cart needs.
        let g = HeatGrid::from_fn(2, 2, |_| 1).unwrap();
        assert_eq!(corner_route(&g, RunLimits::HEAVY), Err(SearchError::NoRoute));
    }

    #[test]
    fn repeated_queries_are_idempotent() {
        let g = grid(BENCHMARK);
        let to = Point::new(g.width() - 1, g.height() - 1);
        let mut rr = RunRange::new(g.bounds());

        assert_eq!(rr.route(&g, Point::ZERO, to, RunLimits::LIGHT), Ok(102));
        // Changing max_run resizes the arena; changing back reuses it.
        assert_eq!(rr.route(&g, Point::ZERO, to, RunLimits::HEAVY), Ok(94));
        assert_eq!(rr.route(&g, Point::ZERO, to, RunLimits::LIGHT), Ok(102));
        assert_eq!(rr.route(&g, Point::ZERO, to, RunLimits::LIGHT), Ok(102));
    }

    #[test]
    fn relaxing_max_run_never_raises_the_cost() {
        let g = grid(BENCHMARK);
        let mut prev = i32::MAX;
        for max_run in [1, 2, 3, 5, 12] {
            let limits = RunLimits::new(1, max_run).unwrap();
            let cost = corner_route(&g, limits).unwrap();
            assert!(
                cost <= prev,
                "max_run {max_run} cost {cost} exceeds {prev}"
            );
            prev = cost;
        }
    }

    #[test]
    fn transposing_the_grid_preserves_the_cost() {
        // Mirroring the grid along the diagonal swaps the roles of the two
        // start directions; the optimum must not depend on that choice.
        let g = grid(BENCHMARK);
        let t = grid(&transposed(BENCHMARK));
        for limits in [RunLimits::LIGHT, RunLimits::HEAVY] {
            assert_eq!(corner_route(&g, limits), corner_route(&t, limits));
        }
    }

    #[test]
    fn zero_cost_cells_fall_back_to_dijkstra() {
        // The straight-line route costs 2, but a zero-cost detour through
        // the bottom row reaches the destination for 1. A Manhattan
        // heuristic would overestimate along the detour and finalize the
        // straight route first; the fallback must not.
        let g = HeatGrid::from_rows(&[vec![5, 1, 1], vec![0, 0, 0]]).unwrap();
        let mut rr = RunRange::new(g.bounds());
        let cost = rr.route(
            &g,
            Point::ZERO,
            Point::new(2, 0),
            RunLimits::new(1, 10).unwrap(),
        );
        assert_eq!(cost, Ok(1));
    }

    #[test]
    fn all_zero_grid_routes_for_free() {
        let g = HeatGrid::from_fn(5, 5, |_| 0).unwrap();
        assert_eq!(corner_route(&g, RunLimits::LIGHT), Ok(0));
    }

    #[test]
    fn out_of_bounds_endpoints_are_rejected() {
        let g = grid(BENCHMARK);
        let mut rr = RunRange::new(g.bounds());
        let outside = Point::new(13, 13);

        assert_eq!(
            rr.route(&g, outside, Point::ZERO, RunLimits::LIGHT),
            Err(SearchError::OutOfBounds(outside))
        );
        assert_eq!(
            rr.route(&g, Point::ZERO, outside, RunLimits::LIGHT),
            Err(SearchError::OutOfBounds(outside))
        );
    }

    #[test]
    fn min_run_forces_costly_overshoot() {
        // Along the top row the cheap cells sit in a straight line; the
        // heavy cart must overshoot into expensive ones before it may turn.
        let g = grid(
            "\
111199
999199
999111",
        );
        let mut rr = RunRange::new(g.bounds());
        let to = Point::new(5, 2);

        let light = rr.route(&g, Point::ZERO, to, RunLimits::LIGHT).unwrap();
        let heavy = rr
            .route(&g, Point::ZERO, to, RunLimits::new(4, 10).unwrap())
            .unwrap();
        assert_eq!(light, 7);
        assert!(heavy > light);
    }
}
