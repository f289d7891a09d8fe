//! Simulated-annealing graph layout.
//!
//! Computes a 2-D placement for the vertices of a directed graph by
//! stochastic search instead of a closed-form algorithm. A generic
//! annealing engine drives a layout cost model that penalizes
//! coincident vertices, vertices sitting on unrelated edges, crossing
//! and overlapping edges, long edges, and edges that fight the
//! vertical tiering derived from edge direction.
//!
//! # Architecture
//!
//! Leaves first:
//!
//! - [`geometry`]: pure segment and point predicates.
//! - [`rank`]: cycle detection and min-rank tier assignment.
//! - [`layout`]: the mutable cost model (positions, energy, moves)
//!   and the end-to-end `solve` driver.
//! - [`anneal`]: the search loop, parameterized only by its
//!   [`anneal::CostModel`] trait.
//! - [`compact`]: a fixed-capacity struct-of-arrays backend behind the
//!   same trait, for hot loops on bounded graphs.
//!
//! The engine owns the search and the best-state snapshot; the cost
//! model owns its positions and is the only thing that mutates them.
//!
//! # Examples
//!
//! ```
//! use graph_anneal::anneal::Schedule;
//! use graph_anneal::layout::{self, Weights};
//!
//! let edges = [("a", "b"), ("b", "c"), ("a", "c")];
//! let schedule = Schedule::default().with_steps(20_000).with_seed(7);
//! let result = layout::solve(&edges, Weights::default(), &schedule).unwrap();
//!
//! // Positions plus the original edge list: everything a renderer needs.
//! assert_eq!(result.positions.len(), 3);
//! assert_eq!(result.edges.len(), 3);
//! ```

pub mod anneal;
pub mod compact;
pub mod geometry;
pub mod layout;
pub mod rank;
