//! Box-shaped search domain and point utilities.

use crate::error::{Error, Result};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A candidate solution: one coordinate per dimension of the domain.
pub type Point = Vec<f64>;

/// Per-dimension `[low, high]` intervals defining the legal search region.
///
/// Construction validates every pair, so a `Bounds` value always has at
/// least one dimension and `low <= high` (both finite) everywhere.
///
/// # Examples
///
/// ```
/// use u_localopt::domain::Bounds;
///
/// let bounds = Bounds::new([(-5.0, 5.0), (0.0, 1.0)]).unwrap();
/// assert_eq!(bounds.dim(), 2);
/// assert_eq!(bounds.clip(&[7.0, -0.5]).unwrap(), vec![5.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")
)]
pub struct Bounds {
    ranges: Vec<(f64, f64)>,
}

impl Bounds {
    /// Creates bounds from `(low, high)` pairs.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyDomain`] if no pair is given.
    /// - [`Error::InvalidBounds`] if a pair has `low > high` or a
    ///   non-finite value.
    pub fn new<I>(ranges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let ranges: Vec<(f64, f64)> = ranges.into_iter().collect();
        if ranges.is_empty() {
            return Err(Error::EmptyDomain);
        }
        for (dimension, &(low, high)) in ranges.iter().enumerate() {
            if !low.is_finite() || !high.is_finite() || low > high {
                return Err(Error::InvalidBounds {
                    dimension,
                    low,
                    high,
                });
            }
        }
        Ok(Self { ranges })
    }

    /// Creates `dim` identical `[low, high]` intervals.
    pub fn uniform(dim: usize, low: f64, high: f64) -> Result<Self> {
        Self::new(std::iter::repeat_n((low, high), dim))
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.ranges.len()
    }

    /// The `(low, high)` pairs.
    pub fn ranges(&self) -> &[(f64, f64)] {
        &self.ranges
    }

    /// Draws each coordinate independently and uniformly from its interval.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Point {
        self.ranges
            .iter()
            .map(|&(low, high)| sample_between(low, high, rng))
            .collect()
    }

    /// Clamps every coordinate into its interval.
    ///
    /// Out-of-range coordinates are clamped silently; only a length
    /// disagreement is an error.
    pub fn clip(&self, point: &[f64]) -> Result<Point> {
        self.check_dim(point)?;
        Ok(self.clamp(point.to_vec()))
    }

    /// Returns `true` if the point has the right dimensionality and every
    /// coordinate lies within its interval (inclusive).
    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.dim()
            && point
                .iter()
                .zip(&self.ranges)
                .all(|(&x, &(low, high))| low <= x && x <= high)
    }

    /// Bounded neighbor: offsets every coordinate by `U[-step, +step]`,
    /// then clamps the result back into the domain.
    ///
    /// A non-positive or non-finite `step` only clamps.
    pub fn perturb<R: Rng>(&self, point: &[f64], step: f64, rng: &mut R) -> Result<Point> {
        self.check_dim(point)?;
        Ok(self.perturb_unchecked(point, step, rng))
    }

    pub(crate) fn perturb_unchecked<R: Rng>(&self, point: &[f64], step: f64, rng: &mut R) -> Point {
        if !(step > 0.0 && step.is_finite()) {
            return self.clamp(point.to_vec());
        }
        let moved = point
            .iter()
            .map(|&x| x + sample_between(-step, step, rng))
            .collect();
        self.clamp(moved)
    }

    fn clamp(&self, mut point: Point) -> Point {
        for (x, &(low, high)) in point.iter_mut().zip(&self.ranges) {
            *x = x.max(low).min(high);
        }
        point
    }

    fn check_dim(&self, point: &[f64]) -> Result<()> {
        if point.len() != self.dim() {
            return Err(Error::DimensionMismatch {
                expected: self.dim(),
                got: point.len(),
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<(f64, f64)>> for Bounds {
    type Error = Error;

    fn try_from(ranges: Vec<(f64, f64)>) -> Result<Self> {
        Self::new(ranges)
    }
}

impl From<Bounds> for Vec<(f64, f64)> {
    fn from(bounds: Bounds) -> Self {
        bounds.ranges
    }
}

/// Uniform draw from `[low, high]` that stays finite even when `high - low`
/// overflows.
fn sample_between<R: Rng>(low: f64, high: f64, rng: &mut R) -> f64 {
    let u: f64 = rng.random();
    (low * (1.0 - u) + high * u).clamp(low, high)
}

/// Euclidean distance between two points of equal dimensionality.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] if the lengths differ.
pub fn distance(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            got: b.len(),
        });
    }
    Ok(euclidean(a, b))
}

pub(crate) fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use u_numflow::random::create_rng;

    fn square() -> Bounds {
        Bounds::new([(-5.0, 5.0), (-5.0, 5.0)]).unwrap()
    }

    #[test]
    fn test_new_rejects_reversed_pair() {
        let err = Bounds::new([(0.0, 1.0), (2.0, 1.0)]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidBounds {
                dimension: 1,
                low: 2.0,
                high: 1.0
            }
        );
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(Bounds::new([(f64::NEG_INFINITY, 0.0)]).is_err());
        assert!(Bounds::new([(0.0, f64::NAN)]).is_err());
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            Bounds::new(Vec::<(f64, f64)>::new()).unwrap_err(),
            Error::EmptyDomain
        );
    }

    #[test]
    fn test_uniform() {
        let bounds = Bounds::uniform(3, -1.0, 1.0).unwrap();
        assert_eq!(bounds.dim(), 3);
        assert!(bounds.ranges().iter().all(|&r| r == (-1.0, 1.0)));
    }

    #[test]
    fn test_degenerate_interval() {
        let bounds = Bounds::new([(2.0, 2.0)]).unwrap();
        let mut rng = create_rng(7);
        assert_eq!(bounds.random_point(&mut rng), vec![2.0]);
    }

    #[test]
    fn test_clip_clamps_silently() {
        let bounds = square();
        assert_eq!(bounds.clip(&[-9.0, 3.0]).unwrap(), vec![-5.0, 3.0]);
        assert_eq!(bounds.clip(&[9.0, 5.0]).unwrap(), vec![5.0, 5.0]);
    }

    #[test]
    fn test_clip_dimension_mismatch() {
        let err = square().clip(&[1.0]).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_contains() {
        let bounds = square();
        assert!(bounds.contains(&[5.0, -5.0]));
        assert!(!bounds.contains(&[5.1, 0.0]));
        assert!(!bounds.contains(&[0.0]));
    }

    #[test]
    fn test_perturb_stays_close() {
        let bounds = square();
        let mut rng = create_rng(3);
        let origin = vec![0.0, 0.0];
        for _ in 0..200 {
            let p = bounds.perturb(&origin, 0.5, &mut rng).unwrap();
            assert!(p.iter().all(|x| x.abs() <= 0.5));
        }
    }

    #[test]
    fn test_perturb_zero_step_is_identity() {
        let bounds = square();
        let mut rng = create_rng(3);
        let p = bounds.perturb(&[1.0, 2.0], 0.0, &mut rng).unwrap();
        assert_eq!(p, vec![1.0, 2.0]);
    }

    #[test]
    fn test_random_point_huge_span() {
        let bounds = Bounds::new([(-1e308, 1e308), (-f64::MAX, f64::MAX)]).unwrap();
        let mut rng = create_rng(1);
        for _ in 0..100 {
            let p = bounds.random_point(&mut rng);
            assert!(p.iter().all(|x| x.is_finite()));
            assert!(bounds.contains(&p));
        }
    }

    #[test]
    fn test_perturb_huge_step() {
        let bounds = square();
        let mut rng = create_rng(1);
        for _ in 0..100 {
            let p = bounds.perturb(&[0.0, 0.0], f64::MAX, &mut rng).unwrap();
            assert!(bounds.contains(&p));
        }
    }

    #[test]
    fn test_distance() {
        assert!((distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap() - 5.0).abs() < 1e-12);
        assert!(matches!(
            distance(&[0.0], &[1.0, 2.0]),
            Err(Error::DimensionMismatch {
                expected: 1,
                got: 2
            })
        ));
    }

    fn arb_bounds() -> impl Strategy<Value = Bounds> {
        prop::collection::vec((-1e3f64..1e3, 0.0f64..1e3), 1..6).prop_map(|pairs| {
            Bounds::new(pairs.into_iter().map(|(low, width)| (low, low + width))).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_random_point_within_bounds(bounds in arb_bounds(), seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let p = bounds.random_point(&mut rng);
            prop_assert!(bounds.contains(&p));
        }

        #[test]
        fn prop_clip_idempotent(
            bounds in arb_bounds(),
            raw in prop::collection::vec(-5e3f64..5e3, 6),
        ) {
            let point = &raw[..bounds.dim()];
            let once = bounds.clip(point).unwrap();
            let twice = bounds.clip(&once).unwrap();
            prop_assert_eq!(&once, &twice);
            prop_assert!(bounds.contains(&once));
        }

        #[test]
        fn prop_perturb_within_bounds(
            bounds in arb_bounds(),
            seed in any::<u64>(),
            step in 0.0f64..100.0,
        ) {
            let mut rng = create_rng(seed);
            let start = bounds.random_point(&mut rng);
            let next = bounds.perturb(&start, step, &mut rng).unwrap();
            prop_assert!(bounds.contains(&next));
        }
    }
}
