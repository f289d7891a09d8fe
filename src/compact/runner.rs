//! Driver for the compact backend.

use super::model::CompactModel;
use crate::anneal::{Annealer, Schedule};
use crate::geometry::Point;
use crate::layout::{LayoutResult, Weights};
use std::collections::HashMap;
use std::hash::Hash;

/// Lays out `edges` on the compact backend. Same contract as
/// [`crate::layout::solve`], plus the fixed-capacity input check.
pub fn solve_compact<V>(
    edges: &[(V, V)],
    weights: Weights,
    schedule: &Schedule,
) -> Result<LayoutResult<V>, String>
where
    V: Clone + Eq + Hash + Ord,
{
    solve_compact_with_observer(edges, weights, schedule, None)
}

/// Lays out `edges` on the compact backend, reporting every
/// improvement through `observer`.
pub fn solve_compact_with_observer<V>(
    edges: &[(V, V)],
    weights: Weights,
    schedule: &Schedule,
    observer: Option<&mut dyn FnMut(&HashMap<V, Point>, f64)>,
) -> Result<LayoutResult<V>, String>
where
    V: Clone + Eq + Hash + Ord,
{
    weights.validate()?;
    let (model, vertices) = CompactModel::from_edges(edges)?;
    let mut model = model.with_weights(weights);

    let collect = |m: &CompactModel| -> HashMap<V, Point> {
        vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| (vertex.clone(), m.position(index)))
            .collect()
    };

    let result = match observer {
        Some(f) => {
            let mut relay = |m: &CompactModel, energy: f64| f(&collect(m), energy);
            Annealer::run_with_observer(&mut model, schedule, Some(&mut relay))?
        }
        None => Annealer::run(&mut model, schedule)?,
    };

    Ok(LayoutResult {
        positions: collect(&result.best),
        edges: edges.to_vec(),
        energy: result.best_energy,
    })
}
