//! Annealing execution loop.

use super::config::Schedule;
use super::types::CostModel;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<M> {
    /// The best configuration found. May be the initial state if no
    /// improving move was ever accepted.
    pub best: M,

    /// Energy of the best configuration.
    pub best_energy: f64,

    /// Number of moves attempted.
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of accepted moves that improved on the best energy.
    pub improving_moves: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,
}

/// Observer invoked with each new best configuration and its energy.
pub type Observer<'a, M> = &'a mut dyn FnMut(&M, f64);

/// Executes the annealing search.
pub struct Annealer;

impl Annealer {
    /// Runs the search until the step budget is exhausted or the energy
    /// reaches zero, returning the best configuration seen.
    pub fn run<M: CostModel>(
        state: &mut M,
        schedule: &Schedule,
    ) -> Result<AnnealResult<M>, String> {
        Self::run_with_observer(state, schedule, None)
    }

    /// Runs the search, reporting progress through `observer`.
    ///
    /// The observer fires synchronously from the search loop: once for
    /// the initial state, then once per accepted improving move, always
    /// with the best configuration so far. Marshalling to another
    /// thread or scheduler is the caller's business.
    pub fn run_with_observer<M: CostModel>(
        state: &mut M,
        schedule: &Schedule,
        mut observer: Option<Observer<'_, M>>,
    ) -> Result<AnnealResult<M>, String> {
        schedule.validate()?;

        let mut rng = match schedule.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let factor = -(schedule.max_temp / schedule.min_temp).ln();
        let mut previous_energy = state.energy();
        let mut best = state.clone();
        let mut best_energy = previous_energy;
        if let Some(f) = observer.as_mut() {
            f(&best, best_energy);
        }

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut temperature = schedule.max_temp;

        if best_energy <= 0.0 {
            // Already optimal; nothing to search for.
            return Ok(AnnealResult {
                best,
                best_energy,
                iterations,
                accepted_moves,
                improving_moves,
                final_temperature: temperature,
            });
        }

        for step in 0..schedule.steps {
            temperature =
                schedule.max_temp * (factor * step as f64 / schedule.steps as f64).exp();

            let record = state.propose_move(&mut rng);
            let energy = state.energy();
            iterations += 1;
            let delta = energy - previous_energy;

            // Metropolis criterion: downhill moves always stick, uphill
            // moves stick with probability exp(-delta/T).
            if delta > 0.0 && (-delta / temperature).exp() < rng.random::<f64>() {
                state.undo_move(record);
                continue;
            }

            previous_energy = energy;
            accepted_moves += 1;
            if energy < best_energy {
                improving_moves += 1;
                best_energy = energy;
                best = state.clone();
                if let Some(f) = observer.as_mut() {
                    f(&best, best_energy);
                }
                if best_energy <= 0.0 {
                    break;
                }
            }
        }

        Ok(AnnealResult {
            best,
            best_energy,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
        })
    }
}
