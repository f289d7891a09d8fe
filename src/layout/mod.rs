//! Graph layout cost model and end-to-end driver.
//!
//! [`LayoutModel`] holds the mutable vertex positions for an edge list
//! and scores a configuration by its geometric and topological
//! violations: coincident vertices, vertices sitting on unrelated
//! edges, crossing or overlapping edges, edges that are neither
//! axis-aligned nor rank-respecting, and total edge length. Each term
//! carries a configurable [`Weights`] entry.
//!
//! [`solve`] wires the pieces together: rank the vertices, build the
//! model with everything at the origin, and let the annealing engine
//! search for a low-energy placement.

mod config;
mod model;
mod runner;

pub use config::Weights;
pub use model::{EnergyBreakdown, LayoutModel, MoveRecord};
#[cfg(feature = "parallel")]
pub use runner::solve_multi_seed;
pub use runner::{solve, solve_with_observer, LayoutResult};

pub(crate) use model::DEFAULT_SPAN;
