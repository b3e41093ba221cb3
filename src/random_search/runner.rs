//! Random search execution loop.

use super::config::RandomSearchConfig;
use crate::domain::{euclidean, Bounds, Objective};
use crate::error::Result;
use crate::result::{is_converged, SearchResult, Termination};
use rand::Rng;
use u_numflow::random::create_rng;

/// Executes random local search.
pub struct RandomSearchRunner;

impl RandomSearchRunner {
    /// Runs random search with a generator seeded from `config.seed`.
    pub fn run<O>(objective: &O, bounds: &Bounds, config: &RandomSearchConfig) -> Result<SearchResult>
    where
        O: Objective + ?Sized,
    {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs random search drawing all randomness from `rng`.
    pub fn run_with_rng<O, R>(
        objective: &O,
        bounds: &Bounds,
        config: &RandomSearchConfig,
        rng: &mut R,
    ) -> Result<SearchResult>
    where
        O: Objective + ?Sized,
        R: Rng,
    {
        config.validate()?;

        let mut best = bounds.random_point(rng);
        let mut best_cost = objective.evaluate(&best);

        let mut cost_history = Vec::with_capacity(config.max_iterations + 1);
        cost_history.push(best_cost);

        let mut iterations = 0usize;
        let mut improving_moves = 0usize;
        let mut termination = Termination::IterationLimit;

        while iterations < config.max_iterations {
            // Full resample: independent of the incumbent.
            let candidate = bounds.random_point(rng);
            let candidate_cost = objective.evaluate(&candidate);
            iterations += 1;

            if candidate_cost < best_cost {
                let improvement = best_cost - candidate_cost;
                let movement = euclidean(&best, &candidate);
                best = candidate;
                best_cost = candidate_cost;
                improving_moves += 1;
                cost_history.push(best_cost);

                if is_converged(improvement, movement, config.epsilon) {
                    termination = Termination::Converged;
                    break;
                }
            } else {
                cost_history.push(best_cost);
            }
        }

        log::debug!(
            "random search stopped after {} iterations ({:?}): best_cost={:.6}, improvements={}",
            iterations,
            termination,
            best_cost,
            improving_moves
        );

        Ok(SearchResult {
            best,
            best_cost,
            iterations,
            termination,
            accepted_moves: improving_moves,
            improving_moves,
            cost_history,
            final_step_size: None,
            final_temperature: None,
        })
    }
}
