//! SA configuration.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for Simulated Annealing over a bounded continuous domain.
///
/// Cooling is geometric: `T_{k+1} = cooling_rate * T_k`, applied once per
/// iteration. The run stops when `T` drops below `epsilon`, when an
/// improvement of the best point is below `epsilon` in both cost and
/// movement, or when the iteration budget is spent.
///
/// # Examples
///
/// ```
/// use u_localopt::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.98)
///     .with_step_size(0.25)
///     .with_max_iterations(5000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaConfig {
    /// Iteration budget.
    pub max_iterations: usize,

    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling factor, strictly in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Threshold for temperature exhaustion and for the convergence test.
    pub epsilon: f64,

    /// Half-width of the per-coordinate neighbor perturbation.
    pub step_size: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
            epsilon: 1e-6,
            step_size: 0.1,
            seed: None,
        }
    }
}

impl SaConfig {
    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the initial temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the geometric cooling factor.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Sets the temperature and convergence threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the neighbor perturbation half-width.
    pub fn with_step_size(mut self, step: f64) -> Self {
        self.step_size = step;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature >= 0.0 && self.initial_temperature.is_finite()) {
            return Err(Error::hyperparameter(
                "initial_temperature",
                format!(
                    "must be finite and non-negative, got {}",
                    self.initial_temperature
                ),
            ));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(Error::hyperparameter(
                "cooling_rate",
                format!("must be in (0, 1), got {}", self.cooling_rate),
            ));
        }
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
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert!((config.initial_temperature - 1000.0).abs() < 1e-10);
        assert!((config.cooling_rate - 0.95).abs() < 1e-12);
        assert!((config.epsilon - 1e-6).abs() < 1e-15);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SaConfig::default()
            .with_max_iterations(250)
            .with_initial_temperature(10.0)
            .with_cooling_rate(0.9)
            .with_epsilon(1e-4)
            .with_step_size(0.5)
            .with_seed(7);
        assert_eq!(config.max_iterations, 250);
        assert_eq!(config.initial_temperature, 10.0);
        assert_eq!(config.cooling_rate, 0.9);
        assert_eq!(config.epsilon, 1e-4);
        assert_eq!(config.step_size, 0.5);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_cooling_rate_bounds() {
        for rate in [0.0, 1.0, 1.5, -0.2, f64::NAN] {
            let err = SaConfig::default()
                .with_cooling_rate(rate)
                .validate()
                .unwrap_err();
            assert!(
                matches!(
                    err,
                    Error::InvalidHyperparameter {
                        name: "cooling_rate",
                        ..
                    }
                ),
                "rate {rate} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_bad_step() {
        assert!(SaConfig::default().with_step_size(-0.1).validate().is_err());
    }
}
