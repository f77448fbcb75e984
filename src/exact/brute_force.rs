//! Exhaustive tour search.
//!
//! # Algorithm
//!
//! Walk every candidate ordering in lexicographic order, compute its cycle
//! length (consecutive edges, then the closing edge) and keep the first
//! strictly shorter one. With [`Enumeration::FixedStart`] index 0 is pinned
//! and only the tail is permuted; with [`Enumeration::AllOrderings`] every
//! ordering of `0..n` is tried.
//!
//! # Complexity
//!
//! O((n-1)!·n) or O(n!·n). Practical up to about ten points; larger inputs
//! are searched anyway, with a warning, unless a deadline or cancel flag cuts
//! the search short.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::{info, warn};

use super::permutation::{factorial, next_permutation};
use crate::config::{BruteForceConfig, Enumeration};
use crate::distance::DistanceMatrix;
use crate::evaluation::cycle_distance;
use crate::models::{Route, SolutionStatus, SolveResult};
use crate::solver::TourSolver;

/// Candidates evaluated between deadline / cancel checks.
const CHECK_INTERVAL: u64 = 1024;

/// Shared flag a caller sets to abort a running search.
///
/// Clones share the same flag.
///
/// # Examples
///
/// ```
/// use geotour::exact::CancelFlag;
///
/// let flag = CancelFlag::new();
/// let handle = flag.clone();
/// handle.cancel();
/// assert!(flag.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Exact solver.
///
/// # Examples
///
/// ```
/// use geotour::models::PointSet;
/// use geotour::distance::DistanceMatrix;
/// use geotour::exact::BruteForce;
///
/// let points = PointSet::from_coordinates(&[
///     (0.0, 0.0), (10.0, 10.0), (0.0, 10.0), (10.0, 0.0),
/// ]).unwrap();
/// let dm = DistanceMatrix::from_points(&points);
///
/// let result = BruteForce::new().solve(&dm);
/// assert!(result.is_optimal());
/// // Around the perimeter, never across the diagonals.
/// let order = result.route().order();
/// assert!(order == [0, 2, 1, 3] || order == [0, 3, 1, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BruteForce {
    config: BruteForceConfig,
    cancel: Option<CancelFlag>,
}

impl BruteForce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BruteForceConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Attaches a flag that stops the search when set.
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn config(&self) -> &BruteForceConfig {
        &self.config
    }

    /// Searches for the shortest closed tour.
    ///
    /// Ties go to the first ordering reached. For fewer than two points the
    /// trivial route is returned with distance 0. If the deadline passes or
    /// the cancel flag is set, the best route seen so far is returned with
    /// [`SolutionStatus::Interrupted`]; the flags are checked after the first
    /// candidate and then every 1024 candidates.
    pub fn solve(&self, distances: &DistanceMatrix) -> SolveResult {
        let start = Instant::now();
        let n = distances.size();

        if n <= 1 {
            let route = Route::from_permutation((0..n).collect());
            return SolveResult::new(route, 0.0, start.elapsed(), SolutionStatus::Optimal);
        }

        let pinned = match self.config.enumeration {
            Enumeration::FixedStart => 1,
            Enumeration::AllOrderings => 0,
        };
        if n > self.config.practical_limit {
            warn!(
                "brute force over {n} points exceeds the practical limit of {}: {} orderings",
                self.config.practical_limit,
                factorial(n - pinned)
            );
        }
        let deadline = self
            .config
            .time_limit()
            .and_then(|limit| start.checked_add(limit));

        let mut order: Vec<usize> = (0..n).collect();
        let mut best_order = order.clone();
        let mut best_distance = f64::INFINITY;
        let mut evaluated: u64 = 0;
        let mut status = SolutionStatus::Optimal;

        loop {
            let d = cycle_distance(distances, &order);
            if d < best_distance {
                best_distance = d;
                best_order.copy_from_slice(&order);
            }
            evaluated += 1;

            if !next_permutation(&mut order[pinned..]) {
                break;
            }
            if evaluated % CHECK_INTERVAL == 1 && self.should_stop(deadline) {
                status = SolutionStatus::Interrupted;
                warn!("brute force stopped after {evaluated} orderings; returning best so far");
                break;
            }
        }

        let elapsed = start.elapsed();
        info!(
            "brute force: n={n} orderings={evaluated} distance={best_distance:.2} km \
             elapsed={elapsed:?} status={status:?}"
        );
        SolveResult::new(
            Route::from_permutation(best_order),
            best_distance,
            elapsed,
            status,
        )
    }

    fn should_stop(&self, deadline: Option<Instant>) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled)
            || deadline.is_some_and(|d| Instant::now() >= d)
    }
}

impl TourSolver for BruteForce {
    fn name(&self) -> &'static str {
        "brute_force"
    }

    fn solve(&self, distances: &DistanceMatrix) -> SolveResult {
        BruteForce::solve(self, distances)
    }
}

/// Finds the optimal tour with the default configuration: index 0 pinned,
/// no deadline.
pub fn solve_brute_force(distances: &DistanceMatrix) -> SolveResult {
    BruteForce::new().solve(distances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::cycle_distance;
    use crate::generation::generate_coordinates;

    fn square() -> DistanceMatrix {
        // Unit square 0-1-2-3, diagonals 1.5
        DistanceMatrix::from_data(
            4,
            vec![
                0.0, 1.0, 1.5, 1.0, //
                1.0, 0.0, 1.0, 1.5, //
                1.5, 1.0, 0.0, 1.0, //
                1.0, 1.5, 1.0, 0.0,
            ],
        )
        .expect("valid")
    }

    #[test]
    fn test_square_perimeter() {
        let result = solve_brute_force(&square());
        assert_eq!(result.route().order(), &[0, 1, 2, 3]);
        assert!((result.distance() - 4.0).abs() < 1e-12);
        assert_eq!(result.status(), SolutionStatus::Optimal);
    }

    #[test]
    fn test_all_orderings_same_optimum() {
        let bf = BruteForce::with_config(
            BruteForceConfig::new().with_enumeration(Enumeration::AllOrderings),
        );
        let result = bf.solve(&square());
        assert_eq!(result.route().order(), &[0, 1, 2, 3]);
        assert!((result.distance() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate() {
        let empty = solve_brute_force(&DistanceMatrix::new(0));
        assert!(empty.route().is_empty());
        assert_eq!(empty.distance(), 0.0);
        assert!(empty.is_optimal());

        let single = solve_brute_force(&DistanceMatrix::new(1));
        assert_eq!(single.route().order(), &[0]);
        assert_eq!(single.distance(), 0.0);
    }

    #[test]
    fn test_two_points() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 3.0, 3.0, 0.0]).expect("valid");
        let result = solve_brute_force(&dm);
        assert_eq!(result.route().order(), &[0, 1]);
        assert!((result.distance() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_tie_goes_to_first_ordering() {
        // Every tour over 4 equidistant points has length 4.
        let mut data = vec![1.0; 16];
        for i in 0..4 {
            data[i * 4 + i] = 0.0;
        }
        let dm = DistanceMatrix::from_data(4, data).expect("valid");
        let result = solve_brute_force(&dm);
        assert_eq!(result.route().order(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_matches_exhaustive_check() {
        let points = generate_coordinates(6, 11).expect("valid");
        let dm = DistanceMatrix::from_points(&points);
        let result = solve_brute_force(&dm);

        let mut order: Vec<usize> = (0..6).collect();
        let mut best = f64::INFINITY;
        loop {
            best = best.min(cycle_distance(&dm, &order));
            if !next_permutation(&mut order) {
                break;
            }
        }
        assert!((result.distance() - best).abs() < 1e-9);
        assert!((result.route().total_distance(&dm) - result.distance()).abs() < 1e-9);
    }

    #[test]
    fn test_enumerations_agree_on_length() {
        let points = generate_coordinates(7, 3).expect("valid");
        let dm = DistanceMatrix::from_points(&points);
        let fixed = solve_brute_force(&dm);
        let all = BruteForce::with_config(
            BruteForceConfig::new().with_enumeration(Enumeration::AllOrderings),
        )
        .solve(&dm);
        assert!((fixed.distance() - all.distance()).abs() < 1e-9);
        assert_eq!(fixed.route().start(), Some(0));
    }

    #[test]
    fn test_pre_cancelled_returns_first_candidate() {
        let flag = CancelFlag::new();
        flag.cancel();
        let result = BruteForce::new().with_cancel_flag(flag).solve(&square());
        assert_eq!(result.status(), SolutionStatus::Interrupted);
        assert_eq!(result.route().order(), &[0, 1, 2, 3]);
        assert!((result.distance() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_deadline_interrupts() {
        let points = generate_coordinates(9, 5).expect("valid");
        let dm = DistanceMatrix::from_points(&points);
        let bf = BruteForce::with_config(BruteForceConfig::new().with_time_limit(0));
        let result = bf.solve(&dm);
        assert_eq!(result.status(), SolutionStatus::Interrupted);
        assert_eq!(result.route().len(), 9);
        assert!(result.distance().is_finite());
    }

    #[test]
    fn test_cancel_ignored_when_single_candidate() {
        let flag = CancelFlag::new();
        flag.cancel();
        let dm = DistanceMatrix::from_data(2, vec![0.0, 3.0, 3.0, 0.0]).expect("valid");
        let result = BruteForce::new().with_cancel_flag(flag).solve(&dm);
        assert!(result.is_optimal());
    }

    #[test]
    fn test_trait_name() {
        assert_eq!(TourSolver::name(&BruteForce::new()), "brute_force");
    }
}
