//! Hill climbing execution loop.

use super::config::HillClimbingConfig;
use crate::domain::{euclidean, Bounds, Objective};
use crate::error::Result;
use crate::result::{is_converged, SearchResult, Termination};
use rand::Rng;
use u_numflow::random::create_rng;

/// Executes stochastic hill climbing.
pub struct HillClimbingRunner;

impl HillClimbingRunner {
    /// Runs hill climbing with a generator seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localopt::domain::{functions::sphere, Bounds};
    /// use u_localopt::hill::{HillClimbingConfig, HillClimbingRunner};
    ///
    /// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
    /// let config = HillClimbingConfig::default().with_seed(42);
    /// let result = HillClimbingRunner::run(&sphere, &bounds, &config).unwrap();
    /// assert!(result.best_cost <= result.initial_cost());
    /// ```
    pub fn run<O>(objective: &O, bounds: &Bounds, config: &HillClimbingConfig) -> Result<SearchResult>
    where
        O: Objective + ?Sized,
    {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs hill climbing drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<O, R>(
        objective: &O,
        bounds: &Bounds,
        config: &HillClimbingConfig,
        rng: &mut R,
    ) -> Result<SearchResult>
    where
        O: Objective + ?Sized,
        R: Rng,
    {
        config.validate()?;

        let mut current = bounds.random_point(rng);
        let mut current_cost = objective.evaluate(&current);
        let mut step = config.step_size;

        let mut cost_history = Vec::with_capacity(config.max_iterations + 1);
        cost_history.push(current_cost);

        let mut iterations = 0usize;
        let mut improving_moves = 0usize;
        let mut termination = Termination::IterationLimit;

        while iterations < config.max_iterations {
            let candidate = bounds.perturb_unchecked(&current, step, rng);
            let candidate_cost = objective.evaluate(&candidate);
            iterations += 1;

            if candidate_cost < current_cost {
                let improvement = current_cost - candidate_cost;
                let movement = euclidean(&current, &candidate);
                current = candidate;
                current_cost = candidate_cost;
                improving_moves += 1;
                cost_history.push(current_cost);

                if is_converged(improvement, movement, config.epsilon) {
                    termination = Termination::Converged;
                    break;
                }
            } else {
                // Narrow the search; floor at epsilon, and never widen a
                // step that started below it.
                step = (step * config.step_decay).max(config.epsilon.min(step));
                cost_history.push(current_cost);
            }
        }

        log::debug!(
            "hill climbing stopped after {} iterations ({:?}): cost={:.6}, step={:.3e}",
            iterations,
            termination,
            current_cost,
            step
        );

        Ok(SearchResult {
            best: current,
            best_cost: current_cost,
            iterations,
            termination,
            accepted_moves: improving_moves,
            improving_moves,
            cost_history,
            final_step_size: Some(step),
            final_temperature: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::functions::sphere;
    use crate::error::Error;

    fn square() -> Bounds {
        Bounds::new([(-5.0, 5.0), (-5.0, 5.0)]).unwrap()
    }

    #[test]
    fn test_hill_sphere_improves() {
        let config = HillClimbingConfig::default()
            .with_max_iterations(5000)
            .with_step_size(0.5)
            .with_seed(42);

        let result = HillClimbingRunner::run(&sphere, &square(), &config).unwrap();

        assert!(
            result.best_cost < 0.1,
            "expected near-zero cost, got {}",
            result.best_cost
        );
        assert!(result.best_cost >= 0.0);
        assert!(square().contains(&result.best));
    }

    #[test]
    fn test_hill_history_non_increasing() {
        let config = HillClimbingConfig::default().with_seed(7);
        let result = HillClimbingRunner::run(&sphere, &square(), &config).unwrap();

        assert_eq!(result.cost_history.len(), result.iterations + 1);
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "current cost should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        assert!(result.best_cost <= result.initial_cost());
        assert_eq!(result.best_cost, sphere(&result.best));
    }

    #[test]
    fn test_hill_step_decay_floors_at_epsilon() {
        // Flat objective: every candidate is rejected.
        let flat = |_: &[f64]| 1.0;
        let config = HillClimbingConfig::default()
            .with_max_iterations(100)
            .with_step_size(0.1)
            .with_step_decay(0.5)
            .with_epsilon(1e-3)
            .with_seed(1);

        let result = HillClimbingRunner::run(&flat, &square(), &config).unwrap();

        assert_eq!(result.iterations, 100);
        assert_eq!(result.improving_moves, 0);
        assert_eq!(result.termination, Termination::IterationLimit);
        assert_eq!(result.final_step_size, Some(1e-3));
    }

    #[test]
    fn test_hill_step_below_epsilon_never_widens() {
        let flat = |_: &[f64]| 1.0;
        let config = HillClimbingConfig::default()
            .with_max_iterations(3)
            .with_step_size(1e-9)
            .with_epsilon(1e-3)
            .with_seed(1);

        let result = HillClimbingRunner::run(&flat, &square(), &config).unwrap();

        let step = result.final_step_size.unwrap();
        assert!(step <= 1e-9, "step grew to {step}");
    }

    #[test]
    fn test_hill_converges_on_tiny_improvements() {
        // One dimension, step never above epsilon: any accepted move is
        // below epsilon in both movement and gain.
        let shallow = |x: &[f64]| 1e-3 * x[0];
        let line = Bounds::new([(-5.0, 5.0)]).unwrap();
        let config = HillClimbingConfig::default()
            .with_max_iterations(1000)
            .with_step_size(1e-6)
            .with_step_decay(1.0)
            .with_epsilon(1e-6)
            .with_seed(5);

        let result = HillClimbingRunner::run(&shallow, &line, &config).unwrap();

        assert!(result.converged());
        assert_eq!(result.improving_moves, 1);
        assert!(result.iterations < 1000);
    }

    #[test]
    fn test_hill_same_seed_same_result() {
        let config = HillClimbingConfig::default().with_seed(99);
        let a = HillClimbingRunner::run(&sphere, &square(), &config).unwrap();
        let b = HillClimbingRunner::run(&sphere, &square(), &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_hill_injected_rng() {
        let config = HillClimbingConfig::default();
        let mut rng_a = create_rng(11);
        let mut rng_b = create_rng(11);
        let a = HillClimbingRunner::run_with_rng(&sphere, &square(), &config, &mut rng_a).unwrap();
        let b = HillClimbingRunner::run_with_rng(&sphere, &square(), &config, &mut rng_b).unwrap();
        assert_eq!(a.best, b.best);
    }

    #[test]
    fn test_hill_zero_iterations() {
        let config = HillClimbingConfig::default()
            .with_max_iterations(0)
            .with_seed(3);
        let result = HillClimbingRunner::run(&sphere, &square(), &config).unwrap();
        assert_eq!(result.iterations, 0);
        assert_eq!(result.cost_history, vec![result.best_cost]);
    }

    #[test]
    fn test_hill_invalid_config() {
        let config = HillClimbingConfig::default().with_step_decay(0.0);
        let err = HillClimbingRunner::run(&sphere, &square(), &config).unwrap_err();
        assert!(matches!(err, Error::InvalidHyperparameter { .. }));
    }
}
