//! Greedy cover assignment.
//!
//! Assigns candidates (teachers) to required items (subjects) so that every
//! item is covered, repeatedly choosing the candidate that covers the most
//! still-uncovered items. Ties on coverage go to the smaller priority key
//! (for teachers: the younger one), then to input order.
//!
//! This is the greedy approximation to set cover. It is fast and
//! deterministic but does not guarantee the minimum number of candidates.
//!
//! # References
//!
//! - Chvátal, V. (1979), "A Greedy Heuristic for the Set-Covering Problem"

mod runner;
mod types;

pub use runner::{create_schedule, CoverAssignment, CoverResult, GreedyCover};
pub use types::{CoverCandidate, Teacher};
