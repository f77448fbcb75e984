//! Dense symmetric distance matrix.

use log::debug;

use super::haversine;
use crate::error::{Error, Result};
use crate::models::PointSet;

/// A dense n×n distance matrix stored in row-major order.
///
/// Always square and symmetric with a zero diagonal; cells are kilometers.
/// Built once per point set and read-only afterwards.
///
/// # Examples
///
/// ```
/// use geotour::models::PointSet;
/// use geotour::distance::DistanceMatrix;
///
/// let points = PointSet::from_coordinates(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]).unwrap();
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 1), dm.get(1, 0));
/// assert_eq!(dm.get(2, 2), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the great-circle distance matrix of a point set.
    ///
    /// Each unordered pair is computed once and mirrored into both cells.
    pub fn from_points(points: &PointSet) -> Self {
        let pts = points.points();
        let n = pts.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                dm.set_pair(i, j, haversine(&pts[i], &pts[j]));
            }
        }
        debug!("built {n}x{n} distance matrix");
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Rejects grids whose length doesn't match `size * size`, and grids that
    /// are not symmetric, have a non-zero diagonal, or hold negative or
    /// non-finite cells.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(Error::invalid_data(format!(
                "expected {} cells for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        let dm = Self { data, size };
        for i in 0..size {
            if dm.get(i, i) != 0.0 {
                return Err(Error::invalid_data(format!(
                    "diagonal cell ({i}, {i}) is {}",
                    dm.get(i, i)
                )));
            }
            for j in (i + 1)..size {
                let d = dm.get(i, j);
                if !d.is_finite() || d < 0.0 {
                    return Err(Error::invalid_data(format!(
                        "cell ({i}, {j}) must be a finite non-negative distance, got {d}"
                    )));
                }
                if d != dm.get(j, i) {
                    return Err(Error::invalid_data(format!(
                        "cells ({i}, {j}) and ({j}, {i}) differ: {d} vs {}",
                        dm.get(j, i)
                    )));
                }
            }
        }
        Ok(dm)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Distances from `from` to every location, in index order.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    fn set_pair(&mut self, i: usize, j: usize, distance: f64) {
        self.data[i * self.size + j] = distance;
        self.data[j * self.size + i] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the unvisited location nearest to `from`.
    ///
    /// Candidates are scanned in ascending index order and only a strictly
    /// smaller distance replaces the current best, so ties go to the lowest
    /// index. Returns `None` once everything is visited.
    pub fn nearest_unvisited(&self, from: usize, visited: &[bool]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &d) in self.row(from).iter().enumerate() {
            if visited[i] {
                continue;
            }
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }
}
