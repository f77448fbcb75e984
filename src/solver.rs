//! Common interface for tour solvers.

use crate::distance::DistanceMatrix;
use crate::models::SolveResult;

/// A solver that turns a distance matrix into a closed tour.
///
/// Implementations only read the matrix, so one matrix can be shared by
/// several solvers, in any order or from several threads at once.
///
/// # Examples
///
/// ```
/// use geotour::constructive::NearestNeighbor;
/// use geotour::distance::DistanceMatrix;
/// use geotour::exact::BruteForce;
/// use geotour::solver::TourSolver;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 2.0,
///     1.0, 0.0, 1.0,
///     2.0, 1.0, 0.0,
/// ]).unwrap();
///
/// let solvers: Vec<Box<dyn TourSolver>> = vec![Box::new(BruteForce::new()), Box::new(NearestNeighbor)];
/// for solver in &solvers {
///     assert_eq!(solver.solve(&dm).distance(), 4.0);
/// }
/// ```
pub trait TourSolver: Send + Sync {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Solves the instance described by `distances`.
    fn solve(&self, distances: &DistanceMatrix) -> SolveResult;
}
