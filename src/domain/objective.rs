//! Objective function trait and benchmark functions.

/// A real-valued cost over points of the search domain. Lower is better.
///
/// Implemented for every `Fn(&[f64]) -> f64 + Send + Sync`, so closures
/// and plain functions can be passed directly.
///
/// # Examples
///
/// ```
/// use u_localopt::domain::Objective;
///
/// let shifted = |x: &[f64]| x.iter().map(|v| (v - 1.0).powi(2)).sum::<f64>();
/// assert_eq!(shifted.evaluate(&[1.0, 1.0]), 0.0);
/// ```
pub trait Objective: Send + Sync {
    /// Computes the cost of `point`.
    fn evaluate(&self, point: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn evaluate(&self, point: &[f64]) -> f64 {
        self(point)
    }
}

/// Standard benchmark objectives.
pub mod functions {
    use std::f64::consts::PI;

    /// Sphere (sum of squares): `sum(x_i^2)`. Global minimum 0 at the origin.
    pub fn sphere(x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    /// Rastrigin: `10n + sum(x_i^2 - 10 cos(2 pi x_i))`. Highly multimodal,
    /// global minimum 0 at the origin.
    pub fn rastrigin(x: &[f64]) -> f64 {
        10.0 * x.len() as f64
            + x.iter()
                .map(|v| v * v - 10.0 * (2.0 * PI * v).cos())
                .sum::<f64>()
    }

    /// Rosenbrock: `sum(100 (x_{i+1} - x_i^2)^2 + (1 - x_i)^2)`. Global
    /// minimum 0 at `(1, ..., 1)`.
    pub fn rosenbrock(x: &[f64]) -> f64 {
        x.windows(2)
            .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
            .sum()
    }
}
