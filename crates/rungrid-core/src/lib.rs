//! **rungrid-core** — foundational types for run-constrained grid routing.
//!
//! This crate provides the geometry primitives ([`Point`], [`Range`]) and the
//! immutable cost grid ([`HeatGrid`]) consumed by the search algorithms in
//! `rungrid-paths`.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range};
pub use grid::{GridError, Heat, HeatGrid};
