//! Interchangeable optimizer selection and repeated independent trials.

use crate::domain::{Bounds, Objective};
use crate::error::{Error, Result};
use crate::hill::{HillClimbingConfig, HillClimbingRunner};
use crate::random_search::{RandomSearchConfig, RandomSearchRunner};
use crate::result::{SearchResult, Termination};
use crate::sa::{SaConfig, SaRunner};
use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three local-search strategies, with its configuration.
///
/// # Examples
///
/// ```
/// use u_localopt::domain::{functions::sphere, Bounds};
/// use u_localopt::hill::HillClimbingConfig;
/// use u_localopt::strategy::Strategy;
///
/// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
/// for strategy in [
///     Strategy::HillClimbing(HillClimbingConfig::default()),
///     Strategy::random_search(),
///     Strategy::simulated_annealing(),
/// ] {
///     let result = strategy.with_seed(1).run(&sphere, &bounds).unwrap();
///     assert!(result.best_cost >= 0.0);
/// }
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Stochastic hill climbing with step decay.
    HillClimbing(HillClimbingConfig),
    /// Pure random search over the whole domain.
    RandomSearch(RandomSearchConfig),
    /// Simulated annealing with geometric cooling.
    SimulatedAnnealing(SaConfig),
}

impl Strategy {
    /// Hill climbing with default settings.
    pub fn hill_climbing() -> Self {
        Strategy::HillClimbing(HillClimbingConfig::default())
    }

    /// Random search with default settings.
    pub fn random_search() -> Self {
        Strategy::RandomSearch(RandomSearchConfig::default())
    }

    /// Simulated annealing with default settings.
    pub fn simulated_annealing() -> Self {
        Strategy::SimulatedAnnealing(SaConfig::default())
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::HillClimbing(_) => "hill-climbing",
            Strategy::RandomSearch(_) => "random-search",
            Strategy::SimulatedAnnealing(_) => "simulated-annealing",
        }
    }

    /// The configured seed, if any.
    pub fn seed(&self) -> Option<u64> {
        match self {
            Strategy::HillClimbing(c) => c.seed,
            Strategy::RandomSearch(c) => c.seed,
            Strategy::SimulatedAnnealing(c) => c.seed,
        }
    }

    /// The iteration budget.
    pub fn max_iterations(&self) -> usize {
        match self {
            Strategy::HillClimbing(c) => c.max_iterations,
            Strategy::RandomSearch(c) => c.max_iterations,
            Strategy::SimulatedAnnealing(c) => c.max_iterations,
        }
    }

    /// Returns the strategy with its seed replaced.
    pub fn with_seed(self, seed: u64) -> Self {
        match self {
            Strategy::HillClimbing(c) => Strategy::HillClimbing(c.with_seed(seed)),
            Strategy::RandomSearch(c) => Strategy::RandomSearch(c.with_seed(seed)),
            Strategy::SimulatedAnnealing(c) => Strategy::SimulatedAnnealing(c.with_seed(seed)),
        }
    }

    /// Returns the strategy with its iteration budget replaced.
    pub fn with_max_iterations(self, n: usize) -> Self {
        match self {
            Strategy::HillClimbing(c) => Strategy::HillClimbing(c.with_max_iterations(n)),
            Strategy::RandomSearch(c) => Strategy::RandomSearch(c.with_max_iterations(n)),
            Strategy::SimulatedAnnealing(c) => {
                Strategy::SimulatedAnnealing(c.with_max_iterations(n))
            }
        }
    }

    /// Validates the wrapped configuration.
    pub fn validate(&self) -> Result<()> {
        match self {
            Strategy::HillClimbing(c) => c.validate(),
            Strategy::RandomSearch(c) => c.validate(),
            Strategy::SimulatedAnnealing(c) => c.validate(),
        }
    }

    /// Runs the selected optimizer, seeded from its configuration.
    pub fn run<O>(&self, objective: &O, bounds: &Bounds) -> Result<SearchResult>
    where
        O: Objective + ?Sized,
    {
        match self {
            Strategy::HillClimbing(c) => HillClimbingRunner::run(objective, bounds, c),
            Strategy::RandomSearch(c) => RandomSearchRunner::run(objective, bounds, c),
            Strategy::SimulatedAnnealing(c) => SaRunner::run(objective, bounds, c),
        }
    }

    /// Runs the selected optimizer drawing randomness from `rng`.
    pub fn run_with_rng<O, R>(&self, objective: &O, bounds: &Bounds, rng: &mut R) -> Result<SearchResult>
    where
        O: Objective + ?Sized,
        R: Rng,
    {
        match self {
            Strategy::HillClimbing(c) => HillClimbingRunner::run_with_rng(objective, bounds, c, rng),
            Strategy::RandomSearch(c) => RandomSearchRunner::run_with_rng(objective, bounds, c, rng),
            Strategy::SimulatedAnnealing(c) => SaRunner::run_with_rng(objective, bounds, c, rng),
        }
    }
}

/// Outcome of repeated independent runs of one strategy.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrialSummary {
    /// Per-trial results, in trial order.
    pub results: Vec<SearchResult>,
    /// Median of the best costs.
    pub median_cost: f64,
    /// Lowest best cost over all trials.
    pub min_cost: f64,
    /// Highest best cost over all trials.
    pub max_cost: f64,
    /// Number of trials that stopped through the convergence test.
    pub converged: usize,
}

impl TrialSummary {
    fn from_results(results: Vec<SearchResult>) -> Self {
        let mut costs: Vec<f64> = results.iter().map(|r| r.best_cost).collect();
        costs.sort_by(f64::total_cmp);

        let n = costs.len();
        let median_cost = if n % 2 == 1 {
            costs[n / 2]
        } else {
            (costs[n / 2 - 1] + costs[n / 2]) / 2.0
        };
        let converged = results
            .iter()
            .filter(|r| r.termination == Termination::Converged)
            .count();

        Self {
            median_cost,
            min_cost: costs[0],
            max_cost: costs[n - 1],
            converged,
            results,
        }
    }

    /// The trial with the lowest best cost.
    pub fn best(&self) -> Option<&SearchResult> {
        self.results
            .iter()
            .min_by(|a, b| a.best_cost.total_cmp(&b.best_cost))
    }
}

/// Runs `trials` independent runs of `strategy`; trial `i` is seeded with
/// `base_seed + i`, so every run has its own random stream and the summary
/// is reproducible.
///
/// With the `parallel` feature the trials execute on the rayon thread pool;
/// results are identical to the sequential path.
///
/// # Errors
///
/// [`Error::InvalidHyperparameter`] when `trials` is zero, or any error
/// from the strategy itself.
pub fn run_trials<O>(
    strategy: &Strategy,
    objective: &O,
    bounds: &Bounds,
    trials: usize,
    base_seed: u64,
) -> Result<TrialSummary>
where
    O: Objective + ?Sized,
{
    if trials == 0 {
        return Err(Error::hyperparameter("trials", "must be at least 1"));
    }
    strategy.validate()?;

    let run_one = |i: usize| {
        strategy
            .clone()
            .with_seed(base_seed.wrapping_add(i as u64))
            .run(objective, bounds)
    };

    #[cfg(feature = "parallel")]
    let results: Vec<SearchResult> = (0..trials)
        .into_par_iter()
        .map(run_one)
        .collect::<Result<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let results: Vec<SearchResult> = (0..trials).map(run_one).collect::<Result<Vec<_>>>()?;

    let summary = TrialSummary::from_results(results);
    log::debug!(
        "{} x{}: median={:.6}, min={:.6}, max={:.6}",
        strategy.name(),
        trials,
        summary.median_cost,
        summary.min_cost,
        summary.max_cost
    );
    Ok(summary)
}
