//! End-to-end layout driver: ranking, cost model, annealing.

use super::config::Weights;
use super::model::LayoutModel;
use crate::anneal::{Annealer, Schedule};
use crate::geometry::Point;
use std::collections::HashMap;
use std::hash::Hash;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Final placement for an edge list.
#[derive(Debug, Clone)]
pub struct LayoutResult<V> {
    /// Best position found for every vertex.
    pub positions: HashMap<V, Point>,

    /// The edge list the layout was computed for, unchanged. A renderer
    /// needs both halves to draw the graph.
    pub edges: Vec<(V, V)>,

    /// Energy of the returned placement.
    pub energy: f64,
}

/// Lays out `edges` under `weights` with the given schedule.
///
/// Builds the cost model (ranked vertices, everything at the origin)
/// and anneals it, returning the best placement found. Running out of
/// steps is not an error; whatever was found is returned.
pub fn solve<V>(
    edges: &[(V, V)],
    weights: Weights,
    schedule: &Schedule,
) -> Result<LayoutResult<V>, String>
where
    V: Clone + Eq + Hash + Ord,
{
    solve_with_observer(edges, weights, schedule, None)
}

/// Lays out `edges`, reporting every improvement through `observer`.
///
/// The observer receives the best positions so far and their energy,
/// synchronously from the search loop; interactive viewers use it to
/// animate convergence.
pub fn solve_with_observer<V>(
    edges: &[(V, V)],
    weights: Weights,
    schedule: &Schedule,
    observer: Option<&mut dyn FnMut(&HashMap<V, Point>, f64)>,
) -> Result<LayoutResult<V>, String>
where
    V: Clone + Eq + Hash + Ord,
{
    weights.validate()?;
    let mut model = LayoutModel::new(edges.to_vec()).with_weights(weights);
    let result = match observer {
        Some(f) => {
            let mut relay = |m: &LayoutModel<V>, energy: f64| f(m.positions(), energy);
            Annealer::run_with_observer(&mut model, schedule, Some(&mut relay))?
        }
        None => Annealer::run(&mut model, schedule)?,
    };
    Ok(LayoutResult {
        positions: result.best.positions().clone(),
        edges: edges.to_vec(),
        energy: result.best_energy,
    })
}

/// Runs one independent seeded search per entry in `seeds` and keeps
/// the best placement. Each search owns its model outright; nothing is
/// shared mutably across threads.
#[cfg(feature = "parallel")]
pub fn solve_multi_seed<V>(
    edges: &[(V, V)],
    weights: Weights,
    schedule: &Schedule,
    seeds: &[u64],
) -> Result<LayoutResult<V>, String>
where
    V: Clone + Eq + Hash + Ord + Send + Sync,
{
    weights.validate()?;
    schedule.validate()?;
    let results: Result<Vec<_>, String> = seeds
        .par_iter()
        .map(|&seed| solve(edges, weights, &schedule.clone().with_seed(seed)))
        .collect();
    results?
        .into_iter()
        .min_by(|a, b| a.energy.total_cmp(&b.energy))
        .ok_or_else(|| "at least one seed is required".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_improves_on_origin_pile() {
        // All three vertices start coincident, which is the worst
        // possible node-node configuration (energy 300 under defaults).
        let edges = [(0u32, 1), (1, 2), (2, 0)];
        let schedule = Schedule::default().with_steps(10_000).with_seed(42);

        let result = solve(&edges, Weights::default(), &schedule).unwrap();

        assert!(
            result.energy < 300.0,
            "search must beat the all-origin start, got {}",
            result.energy
        );
        assert_eq!(result.positions.len(), 3);
        assert_eq!(result.edges, edges.to_vec());
    }

    #[test]
    fn test_observer_log_is_monotone_and_ends_at_result() {
        let edges = [(0u32, 1), (1, 2), (2, 3), (3, 0), (0, 2)];
        let schedule = Schedule::default().with_steps(5_000).with_seed(9);

        let mut log: Vec<f64> = Vec::new();
        let mut observer = |_: &HashMap<u32, Point>, energy: f64| log.push(energy);
        let result =
            solve_with_observer(&edges, Weights::default(), &schedule, Some(&mut observer))
                .unwrap();

        assert!(!log.is_empty());
        for window in log.windows(2) {
            assert!(window[1] < window[0]);
        }
        assert_eq!(*log.last().unwrap(), result.energy);
    }

    #[test]
    fn test_empty_edge_list() {
        let schedule = Schedule::default().with_seed(1);
        let result = solve::<u32>(&[], Weights::default(), &schedule).unwrap();
        assert!(result.positions.is_empty());
        assert!(result.edges.is_empty());
        assert_eq!(result.energy, 0.0);
    }

    #[test]
    fn test_invalid_weights_are_rejected() {
        let edges = [(0u32, 1)];
        let schedule = Schedule::default();
        let weights = Weights::default().with_node_node(-1.0);
        assert!(solve(&edges, weights, &schedule).is_err());
    }

    #[test]
    fn test_invalid_schedule_is_rejected() {
        let edges = [(0u32, 1)];
        let schedule = Schedule::default().with_min_temp(0.0);
        assert!(solve(&edges, Weights::default(), &schedule).is_err());
    }

    #[test]
    fn test_duplicate_edges_are_scored_independently() {
        // Two copies of the same edge overlap wherever they are, except
        // when degenerate; the search still runs and returns positions.
        let edges = [(0u32, 1), (0, 1)];
        let schedule = Schedule::default().with_steps(2_000).with_seed(4);
        let result = solve(&edges, Weights::default(), &schedule).unwrap();
        assert_eq!(result.positions.len(), 2);
        assert_eq!(result.edges.len(), 2);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_multi_seed_returns_best() {
        let edges = [(0u32, 1), (1, 2), (2, 0)];
        let schedule = Schedule::default().with_steps(5_000);
        let seeds = [1u64, 2, 3, 4];

        let best = solve_multi_seed(&edges, Weights::default(), &schedule, &seeds).unwrap();

        for &seed in &seeds {
            let single = solve(
                &edges,
                Weights::default(),
                &schedule.clone().with_seed(seed),
            )
            .unwrap();
            assert!(best.energy <= single.energy);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_multi_seed_rejects_empty_seed_list() {
        let edges = [(0u32, 1)];
        let schedule = Schedule::default();
        assert!(solve_multi_seed(&edges, Weights::default(), &schedule, &[]).is_err());
    }
}
