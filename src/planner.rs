//! End-to-end run: generate points, build the matrix, run both solvers.

use std::fmt;

use log::info;

use crate::config::SolverConfig;
use crate::constructive::NearestNeighbor;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::evaluation::optimality_gap;
use crate::exact::BruteForce;
use crate::generation::TourRequest;
use crate::models::{PointSet, SolveResult};

/// Both solvers' answers for one point set.
///
/// Holds the point set and matrix so a renderer can look up labels,
/// coordinates and leg lengths for either route.
#[derive(Debug, Clone)]
pub struct TourComparison {
    points: PointSet,
    distances: DistanceMatrix,
    brute_force: SolveResult,
    greedy: SolveResult,
}

impl TourComparison {
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn brute_force(&self) -> &SolveResult {
        &self.brute_force
    }

    pub fn greedy(&self) -> &SolveResult {
        &self.greedy
    }

    /// How far the greedy tour is above the brute-force tour, in percent.
    pub fn gap_percent(&self) -> f64 {
        optimality_gap(self.greedy.distance(), self.brute_force.distance())
    }
}

impl fmt::Display for TourComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Brute Force:")?;
        writeln!(f, "{}", self.brute_force)?;
        writeln!(f)?;
        writeln!(f, "Greedy:")?;
        write!(f, "{}", self.greedy)
    }
}

/// Generates `count` points from `seed` and solves them both ways.
///
/// Fails only on a negative count.
///
/// # Examples
///
/// ```
/// use geotour::config::SolverConfig;
/// use geotour::planner::plan_tours;
///
/// let cmp = plan_tours(6, 42, &SolverConfig::default()).unwrap();
/// assert_eq!(cmp.points().len(), 6);
/// assert!(cmp.brute_force().distance() <= cmp.greedy().distance() + 1e-9);
/// assert!(cmp.gap_percent() >= -1e-9);
/// ```
pub fn plan_tours(count: i64, seed: i64, config: &SolverConfig) -> Result<TourComparison> {
    let request = TourRequest::new(count, seed)?;
    info!("planning tours for {} points, seed {}", request.count(), request.seed());
    Ok(compare(request.generate(), config))
}

/// Solves a given point set both ways.
pub fn compare(points: PointSet, config: &SolverConfig) -> TourComparison {
    let distances = DistanceMatrix::from_points(&points);
    let brute_force = BruteForce::with_config(config.brute_force.clone()).solve(&distances);
    let greedy = NearestNeighbor.solve(&distances);
    let cmp = TourComparison {
        points,
        distances,
        brute_force,
        greedy,
    };
    info!("greedy is {:.2}% above brute force", cmp.gap_percent());
    cmp
}
