//! Nearest-neighbor constructive heuristic.
//!
//! Builds a single closed tour greedily: starting from index 0, always move
//! to the nearest unvisited index, then close the cycle back to 0.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. Solution quality is
//! typically 15-25% above optimal, but it is fast and deterministic.

use std::time::Instant;

use log::info;

use crate::distance::DistanceMatrix;
use crate::models::{Route, SolutionStatus, SolveResult};
use crate::solver::TourSolver;

/// Greedy nearest-neighbor solver.
///
/// Ties between equally near candidates go to the lowest index.
///
/// # Examples
///
/// ```
/// use geotour::distance::DistanceMatrix;
/// use geotour::constructive::NearestNeighbor;
///
/// // Points on a line at 0, 1, 2, 3.
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 1.0, 2.0, 3.0,
///     1.0, 0.0, 1.0, 2.0,
///     2.0, 1.0, 0.0, 1.0,
///     3.0, 2.0, 1.0, 0.0,
/// ]).unwrap();
///
/// let result = NearestNeighbor.solve(&dm);
/// assert_eq!(result.route().order(), &[0, 1, 2, 3]);
/// assert_eq!(result.distance(), 6.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

impl NearestNeighbor {
    /// Builds the greedy tour starting at index 0.
    pub fn solve(&self, distances: &DistanceMatrix) -> SolveResult {
        let start = Instant::now();
        let n = distances.size();
        if n <= 1 {
            let route = Route::from_permutation((0..n).collect());
            return SolveResult::new(route, 0.0, start.elapsed(), SolutionStatus::Heuristic);
        }

        let mut visited = vec![false; n];
        visited[0] = true;
        let mut order = Vec::with_capacity(n);
        order.push(0);
        let mut current = 0;
        let mut total = 0.0;

        while let Some(next) = distances.nearest_unvisited(current, &visited) {
            total += distances.get(current, next);
            visited[next] = true;
            order.push(next);
            current = next;
        }
        // Close the cycle without repeating index 0 in the route.
        total += distances.get(current, 0);

        let elapsed = start.elapsed();
        info!("greedy: n={n} distance={total:.2} km elapsed={elapsed:?}");
        SolveResult::new(
            Route::from_permutation(order),
            total,
            elapsed,
            SolutionStatus::Heuristic,
        )
    }
}

impl TourSolver for NearestNeighbor {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, distances: &DistanceMatrix) -> SolveResult {
        NearestNeighbor::solve(self, distances)
    }
}

/// Builds the nearest-neighbor tour starting at index 0.
pub fn solve_greedy(distances: &DistanceMatrix) -> SolveResult {
    NearestNeighbor.solve(distances)
}
