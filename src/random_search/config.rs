//! Random search configuration.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for random local search.
///
/// # Examples
///
/// ```
/// use u_localopt::random_search::RandomSearchConfig;
///
/// let config = RandomSearchConfig::default()
///     .with_max_iterations(2000)
///     .with_seed(7);
/// assert_eq!(config.max_iterations, 2000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RandomSearchConfig {
    /// Iteration budget.
    pub max_iterations: usize,
    /// Convergence threshold for both cost improvement and movement.
    pub epsilon: f64,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for RandomSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            epsilon: 1e-6,
            seed: None,
        }
    }
}

impl RandomSearchConfig {
    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the convergence threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon >= 0.0 && self.epsilon.is_finite()) {
            return Err(Error::hyperparameter(
                "epsilon",
                format!("must be finite and non-negative, got {}", self.epsilon),
            ));
        }
        Ok(())
    }
}
