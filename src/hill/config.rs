//! Hill climbing configuration.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for stochastic hill climbing.
///
/// # Examples
///
/// ```
/// use u_localopt::hill::HillClimbingConfig;
///
/// let config = HillClimbingConfig::default()
///     .with_max_iterations(5000)
///     .with_step_size(0.5)
///     .with_step_decay(0.995)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 5000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HillClimbingConfig {
    /// Iteration budget.
    pub max_iterations: usize,

    /// Convergence threshold for both cost improvement and movement.
    /// Also the floor of the step size, unless `step_size` starts below it.
    pub epsilon: f64,

    /// Initial half-width of the per-coordinate perturbation.
    pub step_size: f64,

    /// Factor applied to the step size after every rejected candidate.
    /// In (0, 1]; 1 disables decay.
    pub step_decay: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            epsilon: 1e-6,
            step_size: 0.1,
            step_decay: 0.99,
            seed: None,
        }
    }
}

impl HillClimbingConfig {
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

    /// Sets the initial perturbation half-width.
    pub fn with_step_size(mut self, step: f64) -> Self {
        self.step_size = step;
        self
    }

    /// Sets the step decay factor.
    pub fn with_step_decay(mut self, decay: f64) -> Self {
        self.step_decay = decay;
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
        if !(self.step_size > 0.0 && self.step_size.is_finite()) {
            return Err(Error::hyperparameter(
                "step_size",
                format!("must be finite and positive, got {}", self.step_size),
            ));
        }
        if !(self.step_decay > 0.0 && self.step_decay <= 1.0) {
            return Err(Error::hyperparameter(
                "step_decay",
                format!("must be in (0, 1], got {}", self.step_decay),
            ));
        }
        Ok(())
    }
}
