//! Local-search metaheuristics over bounded continuous domains, plus a
//! greedy cover assigner.
//!
//! Provides:
//!
//! - **Hill Climbing**: accepts only strictly improving bounded
//!   perturbations; the step size shrinks after every rejection.
//! - **Random Search**: resamples the whole domain each iteration and keeps
//!   the best point seen.
//! - **Simulated Annealing (SA)**: bounded perturbations with Metropolis
//!   acceptance of worsening moves and geometric cooling.
//! - **Greedy Cover**: assigns candidates (e.g. teachers) to required items
//!   (e.g. subjects), largest remaining coverage first.
//!
//! All optimizers minimize an [`Objective`](domain::Objective) over a
//! [`Bounds`](domain::Bounds) box and return a
//! [`SearchResult`](result::SearchResult). Randomness is injectable: pass a
//! seed in the config or any `rand::Rng` to `run_with_rng`.
//!
//! # Examples
//!
//! ```
//! use u_localopt::domain::{functions::sphere, Bounds};
//! use u_localopt::strategy::{run_trials, Strategy};
//!
//! let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
//! let summary = run_trials(&Strategy::simulated_annealing(), &sphere, &bounds, 5, 42).unwrap();
//! assert!(summary.median_cost >= 0.0);
//! ```

pub mod cover;
pub mod domain;
pub mod error;
pub mod hill;
pub mod random_search;
pub mod result;
pub mod sa;
pub mod strategy;

pub use error::{Error, Result};
