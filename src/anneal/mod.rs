//! Generic simulated-annealing engine.
//!
//! Drives repeated propose/score/accept-or-reject cycles over any
//! [`CostModel`], using an exponential cooling schedule and the
//! Metropolis acceptance criterion. The engine knows nothing about the
//! state it optimizes; the graph layout model in [`crate::layout`] is
//! one implementation, and alternate cost models plug in without
//! touching the loop.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;
mod types;

pub use config::Schedule;
pub use runner::{AnnealResult, Annealer, Observer};
pub use types::CostModel;
