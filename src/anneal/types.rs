//! Core trait for the annealing engine.

use rand::Rng;

/// A mutable optimization state the engine can search over.
///
/// The engine drives repeated propose/score/accept-or-undo cycles
/// without knowing anything about the state's domain. Implementors
/// supply the energy function, a reversible random move, and (via
/// `Clone`) an independent snapshot the engine uses to keep the best
/// configuration seen.
///
/// # Contract
///
/// - `energy` is non-negative and finite for every reachable state;
///   lower is better and 0 is optimal.
/// - `undo_move` must exactly reverse the immediately preceding
///   `propose_move`. The engine never stacks moves: at most one move is
///   in flight before being committed or undone.
/// - `Clone` must produce a state whose mutable parts are independent
///   of the original. Immutable structure may be shared.
///
/// # Examples
///
/// ```
/// use graph_anneal::anneal::CostModel;
/// use rand::Rng;
///
/// /// Walks an integer toward zero; energy is its magnitude.
/// #[derive(Clone)]
/// struct Walker(i64);
///
/// impl CostModel for Walker {
///     type Move = i64;
///
///     fn energy(&self) -> f64 {
///         self.0.unsigned_abs() as f64
///     }
///
///     fn propose_move<R: Rng>(&mut self, rng: &mut R) -> i64 {
///         let prior = self.0;
///         self.0 += if rng.random::<bool>() { 1 } else { -1 };
///         prior
///     }
///
///     fn undo_move(&mut self, prior: i64) {
///         self.0 = prior;
///     }
/// }
/// ```
pub trait CostModel: Clone {
    /// Token that reverses exactly one move. Created by `propose_move`,
    /// consumed by the matching `undo_move`, never kept beyond one step.
    type Move;

    /// Scores the current configuration. Lower is better.
    fn energy(&self) -> f64;

    /// Applies one random reversible mutation and returns its undo token.
    fn propose_move<R: Rng>(&mut self, rng: &mut R) -> Self::Move;

    /// Reverses the move that produced `record`.
    fn undo_move(&mut self, record: Self::Move);
}
