//! Random local search.
//!
//! Pure random search: every iteration draws a fresh uniform point over the
//! whole domain and keeps it only when it strictly beats the best so far.
//! Sampling never depends on the incumbent. The dual epsilon convergence
//! test is applied on each acceptance.

mod config;
mod runner;

pub use config::RandomSearchConfig;
pub use runner::RandomSearchRunner;
