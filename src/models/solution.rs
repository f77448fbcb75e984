//! Solver result types.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use super::Route;

/// How much a result can be trusted to be optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionStatus {
    /// Exhaustive search ran to completion.
    Optimal,
    /// Exhaustive search stopped early on its deadline or cancel flag; the
    /// route is the best complete tour seen before stopping.
    Interrupted,
    /// Produced by a construction heuristic.
    Heuristic,
}

/// A route with its cycle length and the wall time spent finding it.
///
/// Built fresh by every solver call and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use geotour::distance::DistanceMatrix;
/// use geotour::constructive::solve_greedy;
///
/// let result = solve_greedy(&DistanceMatrix::new(0));
/// assert!(result.route().is_empty());
/// assert_eq!(result.distance(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveResult {
    route: Route,
    distance: f64,
    elapsed: Duration,
    status: SolutionStatus,
}

impl SolveResult {
    pub(crate) fn new(
        route: Route,
        distance: f64,
        elapsed: Duration,
        status: SolutionStatus,
    ) -> Self {
        Self {
            route,
            distance,
            elapsed,
            status,
        }
    }

    /// The tour found.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Total cycle length in kilometers, closing edge included.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Wall time spent by the solver.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn status(&self) -> SolutionStatus {
        self.status
    }

    /// Returns `true` if the search finished and the route is a global optimum.
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    /// Consumes the result, returning the route.
    pub fn into_route(self) -> Route {
        self.route
    }
}

impl fmt::Display for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route: {}", self.route)?;
        writeln!(f, "Distance: {:.2} km", self.distance)?;
        write!(f, "Time: {:.6} s", self.elapsed.as_secs_f64())
    }
}
