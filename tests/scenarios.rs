use std::thread;
use std::time::Duration;

use geotour::config::{BruteForceConfig, Enumeration, SolverConfig};
use geotour::constructive::{solve_greedy, NearestNeighbor};
use geotour::distance::DistanceMatrix;
use geotour::exact::{solve_brute_force, BruteForce, CancelFlag};
use geotour::generation::generate_coordinates;
use geotour::models::{PointSet, SolutionStatus};
use geotour::planner::plan_tours;
use geotour::solver::TourSolver;
use geotour::ErrorKind;

fn square() -> DistanceMatrix {
    let points =
        PointSet::from_coordinates(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)])
            .expect("valid");
    DistanceMatrix::from_points(&points)
}

fn is_perimeter(order: &[usize]) -> bool {
    order == [0, 1, 2, 3] || order == [0, 3, 2, 1]
}

#[test]
fn test_square_brute_force_takes_perimeter() {
    let dm = square();
    let result = solve_brute_force(&dm);
    assert!(is_perimeter(result.route().order()), "{}", result.route());
    // Crossing the diagonals is strictly longer.
    assert!(result.distance() < geotour::evaluation::cycle_distance(&dm, &[0, 2, 1, 3]));
}

#[test]
fn test_square_greedy_takes_perimeter() {
    let dm = square();
    let greedy = solve_greedy(&dm);
    let exact = solve_brute_force(&dm);
    assert!(is_perimeter(greedy.route().order()), "{}", greedy.route());
    assert!((greedy.distance() - exact.distance()).abs() < 1e-9);
}

#[test]
fn test_seed_42_count_5_reproducible() {
    let first = generate_coordinates(5, 42).expect("valid");
    for _ in 0..3 {
        let again = generate_coordinates(5, 42).expect("valid");
        assert_eq!(again, first);
        assert_eq!(again.to_string(), first.to_string());
    }
    assert_eq!(first.len(), 5);
}

#[test]
fn test_degenerate_counts() {
    for solver in [
        &BruteForce::new() as &dyn TourSolver,
        &NearestNeighbor as &dyn TourSolver,
    ] {
        let empty = solver.solve(&DistanceMatrix::from_points(
            &generate_coordinates(0, 1).expect("valid"),
        ));
        assert!(empty.route().is_empty(), "{}", solver.name());
        assert_eq!(empty.distance(), 0.0);

        let single = solver.solve(&DistanceMatrix::from_points(
            &generate_coordinates(1, 1).expect("valid"),
        ));
        assert_eq!(single.route().order(), &[0], "{}", solver.name());
        assert_eq!(single.distance(), 0.0);
    }
}

#[test]
fn test_invalid_count_is_structured_error() {
    let err = generate_coordinates(-7, 42).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(err.to_string().contains("non-negative"));
}

#[test]
fn test_brute_force_beats_greedy_up_to_nine() {
    for seed in 0..3 {
        let points = generate_coordinates(9, seed).expect("valid");
        let dm = DistanceMatrix::from_points(&points);
        let exact = solve_brute_force(&dm);
        let greedy = solve_greedy(&dm);
        assert!(exact.is_optimal());
        assert!(exact.distance() <= greedy.distance() + 1e-9);
    }
}

#[test]
fn test_all_orderings_matches_fixed_start() {
    let points = generate_coordinates(6, 17).expect("valid");
    let dm = DistanceMatrix::from_points(&points);
    let all = BruteForce::with_config(
        BruteForceConfig::new().with_enumeration(Enumeration::AllOrderings),
    )
    .solve(&dm);
    let fixed = solve_brute_force(&dm);
    assert!((all.distance() - fixed.distance()).abs() < 1e-9);
    assert_eq!(all.route().len(), 6);
}

#[test]
fn test_cancel_from_another_thread() {
    let points = generate_coordinates(12, 3).expect("valid");
    let dm = DistanceMatrix::from_points(&points);
    let flag = CancelFlag::new();
    let solver = BruteForce::new().with_cancel_flag(flag.clone());

    let result = thread::scope(|s| {
        let handle = s.spawn(|| solver.solve(&dm));
        thread::sleep(Duration::from_millis(20));
        flag.cancel();
        handle.join().expect("solver thread")
    });
    assert_eq!(result.status(), SolutionStatus::Interrupted);
    assert_eq!(result.route().len(), 12);
    assert!(result.distance().is_finite());
    assert_eq!(result.route().start(), Some(0));
}

#[test]
fn test_deadline_bounds_runtime() {
    let points = generate_coordinates(13, 4).expect("valid");
    let dm = DistanceMatrix::from_points(&points);
    let result = BruteForce::with_config(BruteForceConfig::new().with_time_limit(50)).solve(&dm);
    assert_eq!(result.status(), SolutionStatus::Interrupted);
    assert!(result.elapsed() < Duration::from_secs(5));
}

#[test]
fn test_solvers_share_matrix_across_threads() {
    let points = generate_coordinates(8, 21).expect("valid");
    let dm = DistanceMatrix::from_points(&points);
    let (exact, greedy) = thread::scope(|s| {
        let a = s.spawn(|| solve_brute_force(&dm));
        let b = s.spawn(|| solve_greedy(&dm));
        (a.join().expect("exact"), b.join().expect("greedy"))
    });
    assert_eq!(exact.route(), solve_brute_force(&dm).route());
    assert_eq!(greedy.route(), solve_greedy(&dm).route());
}

#[test]
fn test_plan_tours_with_config() {
    let config = SolverConfig::from_json(r#"{"brute_force": {"enumeration": "all_orderings"}}"#)
        .expect("valid");
    let cmp = plan_tours(5, 42, &config).expect("valid");
    assert_eq!(cmp.points(), &generate_coordinates(5, 42).expect("valid"));
    assert!(cmp.gap_percent() >= -1e-9);
    let legs = cmp.greedy().route().legs(cmp.distances());
    assert_eq!(legs.len(), 5);
    let total: f64 = legs.iter().map(|l| l.distance).sum();
    assert!((total - cmp.greedy().distance()).abs() < 1e-6);
}
