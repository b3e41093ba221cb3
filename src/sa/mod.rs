//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Neighbors are bounded perturbations of the current
//! point; worsening moves are accepted with the Metropolis probability
//! `exp(-delta / T)`, which shrinks as the temperature cools geometrically.
//! Current and best points are tracked separately because the current point
//! may move uphill.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{metropolis_probability, SaRunner};
