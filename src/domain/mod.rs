//! Search domain: bounds, points and objective functions.
//!
//! Shared by all optimizers. A [`Bounds`] is validated once at
//! construction; point operations clamp silently and only fail on a
//! dimensionality mismatch.

mod bounds;
mod objective;

pub use bounds::{distance, Bounds, Point};
pub(crate) use bounds::euclidean;
pub use objective::{functions, Objective};
