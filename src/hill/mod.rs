//! Stochastic hill climbing.
//!
//! Perturbs every coordinate of the current point by a uniform offset in
//! `[-step, +step]` and keeps the candidate only when it strictly lowers the
//! cost. Each rejection shrinks the step geometrically (floored at
//! epsilon, or at the initial step if that is smaller), so the search
//! narrows around the incumbent. Only improving moves are accepted, so the
//! current point is also the best point.
//!
//! Stops when the iteration budget is spent or an accepted move improves
//! the cost by less than epsilon while moving less than epsilon.

mod config;
mod runner;

pub use config::HillClimbingConfig;
pub use runner::HillClimbingRunner;
