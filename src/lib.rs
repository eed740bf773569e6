//! Per-cell path lengths of straight rays crossing a grid of axis-aligned
//! cells.
//!
//! The core is a Cohen-Sutherland segment clipper ([`math::clip_2d`]) driven
//! by an outcode classifier ([`math::outcode`]). The batch operations in
//! [`operations`] run it over every (ray, cell) pair.

pub mod error;
pub mod geometry;
pub mod grid;
pub mod math;
pub mod operations;

pub use error::{CellPathError, Result};
pub use geometry::{Rect, Segment};
pub use grid::Grid;
pub use math::clip_2d::{clip, clip_with, ClipResult};
pub use math::outcode::{classify, Edge, Outcode};
pub use math::{Arithmetic, Point2};
pub use operations::{BatchParams, CellTotals, PathLengths, ScaledPathLengths};
