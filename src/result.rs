//! Search outcome shared by all optimizers.

use crate::domain::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    /// The iteration budget was exhausted.
    IterationLimit,
    /// An accepted improvement was smaller than epsilon in both cost and
    /// Euclidean movement.
    Converged,
    /// Simulated annealing only: the temperature fell below epsilon.
    TemperatureExhausted,
}

/// Result of one optimizer run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    /// The best point found (for hill climbing, the final current point).
    pub best: Point,

    /// Cost of `best`.
    pub best_cost: f64,

    /// Number of iterations executed (candidate evaluations).
    pub iterations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Number of accepted candidates (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving candidates.
    pub improving_moves: usize,

    /// Tracked cost per iteration. Entry 0 is the initial point's cost.
    ///
    /// Hill climbing and random search track their only incumbent; simulated
    /// annealing tracks the best cost, so the history is non-increasing for
    /// all three.
    pub cost_history: Vec<f64>,

    /// Hill climbing only: step size when the run stopped.
    pub final_step_size: Option<f64>,

    /// Simulated annealing only: temperature when the run stopped.
    pub final_temperature: Option<f64>,
}

impl SearchResult {
    /// Cost of the initial random point.
    pub fn initial_cost(&self) -> f64 {
        self.cost_history.first().copied().unwrap_or(self.best_cost)
    }

    /// Whether the run stopped through the dual epsilon test.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Dual convergence test: both the cost improvement and the distance moved
/// are below `epsilon`.
pub(crate) fn is_converged(improvement: f64, movement: f64, epsilon: f64) -> bool {
    improvement < epsilon && movement < epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_converged_requires_both() {
        assert!(is_converged(1e-9, 1e-9, 1e-6));
        assert!(!is_converged(1e-9, 1e-3, 1e-6));
        assert!(!is_converged(1e-3, 1e-9, 1e-6));
    }

    #[test]
    fn test_initial_cost() {
        let result = SearchResult {
            best: vec![0.0],
            best_cost: 1.0,
            iterations: 2,
            termination: Termination::IterationLimit,
            accepted_moves: 1,
            improving_moves: 1,
            cost_history: vec![4.0, 1.0, 1.0],
            final_step_size: None,
            final_temperature: None,
        };
        assert_eq!(result.initial_cost(), 4.0);
        assert!(!result.converged());
    }
}
