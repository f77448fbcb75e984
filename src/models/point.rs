//! Geographic point and point set types.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

const MAX_LATITUDE: f64 = 90.0;
const MAX_LONGITUDE: f64 = 180.0;

/// A labelled location on the sphere, in degrees.
///
/// Latitude lies in `[-90, 90]`, longitude in `[-180, 180]`. Points are
/// immutable once built.
///
/// # Examples
///
/// ```
/// use geotour::models::GeoPoint;
///
/// let p = GeoPoint::new(3, "Jakarta", -6.2, 106.8).unwrap();
/// assert_eq!(p.id(), 3);
/// assert_eq!(p.label(), "Jakarta");
/// assert!(GeoPoint::new(0, "bad", 91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoPoint {
    id: usize,
    label: String,
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Creates a point, rejecting non-finite or out-of-range coordinates.
    pub fn new(id: usize, label: impl Into<String>, lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&lat) {
            return Err(Error::invalid_input(format!(
                "latitude must be within [-90, 90], got {lat}"
            )));
        }
        if !lon.is_finite() || !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&lon) {
            return Err(Error::invalid_input(format!(
                "longitude must be within [-180, 180], got {lon}"
            )));
        }
        Ok(Self {
            id,
            label: label.into(),
            lat,
            lon,
        })
    }

    /// Creates a point from coordinates already known to be in range.
    pub(crate) fn in_range(id: usize, label: String, lat: f64, lon: f64) -> Self {
        debug_assert!((-MAX_LATITUDE..=MAX_LATITUDE).contains(&lat));
        debug_assert!((-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&lon));
        Self { id, label, lat, lon }
    }

    /// Position of this point in its set.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// `(lat, lon)` pair, the order map renderers expect.
    pub fn coordinates(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ({}, {})", self.label, self.lat, self.lon)
    }
}

/// An ordered sequence of points indexed `0..n`.
///
/// Insertion order is the canonical index order; index 0 is where both
/// solvers start.
///
/// # Examples
///
/// ```
/// use geotour::models::PointSet;
///
/// let set = PointSet::from_coordinates(&[(0.0, 0.0), (0.0, 10.0)]).unwrap();
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.get(1).unwrap().label(), "City 1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PointSet {
    points: Vec<GeoPoint>,
}

impl PointSet {
    /// Creates a point set, checking that each point's id matches its index.
    pub fn new(points: Vec<GeoPoint>) -> Result<Self> {
        if let Some((i, p)) = points.iter().enumerate().find(|(i, p)| p.id() != *i) {
            return Err(Error::invalid_input(format!(
                "point at index {i} carries id {}",
                p.id()
            )));
        }
        Ok(Self { points })
    }

    /// Wraps points whose ids already run `0..n`.
    pub(crate) fn sequential(points: Vec<GeoPoint>) -> Self {
        debug_assert!(points.iter().enumerate().all(|(i, p)| p.id() == i));
        Self { points }
    }

    /// Builds a point set from `(lat, lon)` pairs, labelled `City 0`, `City 1`, ...
    pub fn from_coordinates(coordinates: &[(f64, f64)]) -> Result<Self> {
        let points = coordinates
            .iter()
            .enumerate()
            .map(|(i, &(lat, lon))| GeoPoint::new(i, city_label(i), lat, lon))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GeoPoint> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// One `label: (lat, lon)` line per point.
impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

pub(crate) fn city_label(index: usize) -> String {
    format!("City {index}")
}
