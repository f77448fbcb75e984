//! Seeded random point generation.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::models::{city_label, GeoPoint, PointSet};

/// A validated `(count, seed)` pair.
///
/// This is the input boundary of the crate: callers that parse text hand
/// the parsed integers here and get a typed error back for a negative count.
/// Nothing is clamped.
///
/// # Examples
///
/// ```
/// use geotour::generation::TourRequest;
///
/// let req = TourRequest::new(5, 42).unwrap();
/// assert_eq!(req.count(), 5);
/// assert!(TourRequest::new(-1, 42).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourRequest {
    count: usize,
    seed: i64,
}

impl TourRequest {
    pub fn new(count: i64, seed: i64) -> Result<Self> {
        let count = usize::try_from(count).map_err(|_| {
            Error::invalid_input(format!("point count must be non-negative, got {count}"))
        })?;
        Ok(Self { count, seed })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// A generator owned by this request, seeded from its seed.
    pub fn rng(&self) -> StdRng {
        // Negative seeds keep their bit pattern.
        StdRng::seed_from_u64(self.seed as u64)
    }

    /// Generates the point set this request describes.
    pub fn generate(&self) -> PointSet {
        generate_with_rng(self.count, &mut self.rng())
    }
}

/// Generates `count` points from `seed`.
///
/// Points are labelled `City 0`, `City 1`, ... and placed uniformly in
/// `[-90, 90] × [-180, 180]`. The same `(count, seed)` always gives the same
/// point set. A negative count is rejected with
/// [`Error::InvalidInput`](crate::Error::InvalidInput).
///
/// # Examples
///
/// ```
/// use geotour::generation::generate_coordinates;
///
/// let a = generate_coordinates(5, 42).unwrap();
/// let b = generate_coordinates(5, 42).unwrap();
/// assert_eq!(a, b);
/// assert!(generate_coordinates(0, 42).unwrap().is_empty());
/// ```
pub fn generate_coordinates(count: i64, seed: i64) -> Result<PointSet> {
    Ok(TourRequest::new(count, seed)?.generate())
}

/// Generates `count` points drawing from the given generator.
///
/// For each point the latitude is drawn before the longitude.
pub fn generate_with_rng<R: Rng>(count: usize, rng: &mut R) -> PointSet {
    let points = (0..count)
        .map(|i| {
            let lat = rng.random_range(-90.0..=90.0);
            let lon = rng.random_range(-180.0..=180.0);
            GeoPoint::in_range(i, city_label(i), lat, lon)
        })
        .collect();
    debug!("generated {count} points");
    PointSet::sequential(points)
}
