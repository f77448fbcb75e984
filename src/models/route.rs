//! Closed tour and leg types.

use std::fmt;

use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::evaluation::cycle_distance;

/// One edge of a tour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Leg {
    /// Index the leg starts at.
    pub from: usize,
    /// Index the leg ends at.
    pub to: usize,
    /// Great-circle length in kilometers.
    pub distance: f64,
}

/// A closed tour: a permutation of `0..n` read as a cycle.
///
/// The edge from the last index back to the first is implicit and is not
/// stored. Partial tours cannot be represented.
///
/// # Examples
///
/// ```
/// use geotour::models::Route;
///
/// let route = Route::new(vec![0, 2, 1]).unwrap();
/// assert_eq!(route.len(), 3);
/// assert!(Route::new(vec![0, 2, 2]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Route {
    order: Vec<usize>,
}

impl Route {
    /// Creates a route, rejecting anything that is not a permutation of
    /// `0..order.len()`.
    pub fn new(order: Vec<usize>) -> Result<Self> {
        let n = order.len();
        let mut seen = vec![false; n];
        for &i in &order {
            if i >= n {
                return Err(Error::invalid_input(format!(
                    "route index {i} out of range for {n} points"
                )));
            }
            if seen[i] {
                return Err(Error::invalid_input(format!(
                    "route visits index {i} more than once"
                )));
            }
            seen[i] = true;
        }
        Ok(Self { order })
    }

    /// Wraps an order the caller already knows to be a permutation.
    pub(crate) fn from_permutation(order: Vec<usize>) -> Self {
        debug_assert!(Self::new(order.clone()).is_ok());
        Self { order }
    }

    /// Indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// First index of the tour, if any.
    pub fn start(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Total cycle length including the closing edge.
    ///
    /// # Panics
    ///
    /// Panics if the route refers to an index outside `distances`.
    pub fn total_distance(&self, distances: &DistanceMatrix) -> f64 {
        cycle_distance(distances, &self.order)
    }

    /// Edges in visiting order, ending with the closing edge back to the start.
    ///
    /// Empty for routes of fewer than two points.
    ///
    /// # Panics
    ///
    /// Panics if the route refers to an index outside `distances`.
    pub fn legs(&self, distances: &DistanceMatrix) -> Vec<Leg> {
        let n = self.order.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| {
                let from = self.order[i];
                let to = self.order[(i + 1) % n];
                Leg {
                    from,
                    to,
                    distance: distances.get(from, to),
                }
            })
            .collect()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.order)
    }
}
