//! # geotour
//!
//! Shortest closed tours over points on the sphere: a reproducible point
//! generator, haversine distance matrix, an exact brute-force solver and a
//! greedy nearest-neighbor heuristic.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (GeoPoint, PointSet, Route, SolveResult)
//! - [`generation`] — Seeded point generation and the validated input boundary
//! - [`distance`] — Haversine distance and the dense distance matrix
//! - [`evaluation`] — Cycle length and optimality gap
//! - [`exact`] — Brute-force search with deadline and cancel hooks
//! - [`constructive`] — Nearest-neighbor construction
//! - [`solver`] — The [`TourSolver`](solver::TourSolver) trait both solvers implement
//! - [`planner`] — Generate, build, and run both solvers in one call
//! - [`config`] / [`logging`] — Configuration and `env_logger` setup
//!
//! ## Example
//!
//! ```
//! use geotour::constructive::solve_greedy;
//! use geotour::distance::DistanceMatrix;
//! use geotour::exact::solve_brute_force;
//! use geotour::generation::generate_coordinates;
//!
//! let points = generate_coordinates(6, 42)?;
//! let dm = DistanceMatrix::from_points(&points);
//!
//! let exact = solve_brute_force(&dm);
//! let greedy = solve_greedy(&dm);
//! assert!(exact.distance() <= greedy.distance() + 1e-9);
//! # Ok::<(), geotour::Error>(())
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
mod error;
pub mod evaluation;
pub mod exact;
pub mod generation;
pub mod logging;
pub mod models;
pub mod planner;
pub mod solver;

pub use error::{Error, ErrorKind, Result};
