//! Fixed-capacity struct-of-arrays layout backend.
//!
//! Dense mirror of [`LayoutModel`](crate::layout::LayoutModel) for hot
//! search loops: vertex ids collapse to indices, positions live in
//! flat `f32` arrays, and cloning is a plain copy with no allocation.
//! The energy formula, move distribution, and acceptance behavior are
//! identical to the baseline model — this backend is an optimization,
//! not a semantic change, and the baseline stays the reference the
//! tests validate it against.
//!
//! Capacity is fixed at [`MAX_NODES`] vertices and [`MAX_EDGES`]
//! edges; larger inputs are rejected up front, before any search
//! begins.

mod model;
mod runner;

pub use model::{CompactModel, CompactMove, MAX_EDGES, MAX_NODES};
pub use runner::{solve_compact, solve_compact_with_observer};
