//! SA execution loop.

use super::config::SaConfig;
use crate::domain::{euclidean, Bounds, Objective};
use crate::error::Result;
use crate::result::{is_converged, SearchResult, Termination};
use rand::Rng;
use u_numflow::random::create_rng;

/// Metropolis acceptance probability for a move that changes the cost by
/// `delta` at `temperature`.
///
/// Always in `[0, 1]` and never NaN: improving or neutral moves (`delta <= 0`)
/// get 1; a non-positive temperature, a NaN delta or an undefined exponent
/// gets 0; otherwise `exp(-delta / T)`, which underflows cleanly to 0 as `T`
/// approaches zero.
///
/// # Examples
///
/// ```
/// use u_localopt::sa::metropolis_probability;
///
/// assert_eq!(metropolis_probability(-1.0, 10.0), 1.0);
/// assert!((metropolis_probability(1.0, 1.0) - (-1.0f64).exp()).abs() < 1e-15);
/// assert_eq!(metropolis_probability(1.0, 1e-300), 0.0);
/// ```
pub fn metropolis_probability(delta: f64, temperature: f64) -> f64 {
    if delta <= 0.0 {
        return 1.0;
    }
    if delta.is_nan() || !(temperature > 0.0) {
        return 0.0;
    }
    let exponent = -delta / temperature;
    if exponent.is_nan() {
        return 0.0;
    }
    exponent.exp().clamp(0.0, 1.0)
}

/// Executes Simulated Annealing over a bounded continuous domain.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localopt::domain::{functions::sphere, Bounds};
    /// use u_localopt::sa::{SaConfig, SaRunner};
    ///
    /// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
    /// let config = SaConfig::default().with_seed(42);
    /// let result = SaRunner::run(&sphere, &bounds, &config).unwrap();
    /// assert!(result.best_cost >= 0.0);
    /// assert!(bounds.contains(&result.best));
    /// ```
    pub fn run<O>(objective: &O, bounds: &Bounds, config: &SaConfig) -> Result<SearchResult>
    where
        O: Objective + ?Sized,
    {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs SA drawing all randomness (neighbors and the Metropolis test)
    /// from `rng`.
    pub fn run_with_rng<O, R>(
        objective: &O,
        bounds: &Bounds,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SearchResult>
    where
        O: Objective + ?Sized,
        R: Rng,
    {
        config.validate()?;

        // Initialize
        let mut current = bounds.random_point(rng);
        let mut current_cost = objective.evaluate(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut termination = Termination::IterationLimit;

        let mut cost_history = Vec::with_capacity(config.max_iterations + 1);
        cost_history.push(best_cost);

        while iterations < config.max_iterations {
            if temperature < config.epsilon {
                termination = Termination::TemperatureExhausted;
                break;
            }

            let candidate = bounds.perturb_unchecked(&current, config.step_size, rng);
            let candidate_cost = objective.evaluate(&candidate);
            let delta = candidate_cost - current_cost;
            iterations += 1;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random_range(0.0..1.0) < metropolis_probability(delta, temperature)
            };

            let mut converged = false;
            if accept {
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    let improvement = best_cost - current_cost;
                    let movement = euclidean(&best, &current);
                    best = current.clone();
                    best_cost = current_cost;
                    converged = is_converged(improvement, movement, config.epsilon);
                }
            }

            cost_history.push(best_cost);

            // Cool down
            temperature *= config.cooling_rate;

            if converged {
                termination = Termination::Converged;
                break;
            }
        }

        log::debug!(
            "SA stopped after {} iterations ({:?}): temp={:.4e}, best_cost={:.6}, accepted={}",
            iterations,
            termination,
            temperature,
            best_cost,
            accepted_moves
        );

        Ok(SearchResult {
            best,
            best_cost,
            iterations,
            termination,
            accepted_moves,
            improving_moves,
            cost_history,
            final_step_size: None,
            final_temperature: Some(temperature),
        })
    }
}
