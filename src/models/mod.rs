//! Domain model types for closed tours over geographic points.
//!
//! Provides labelled points and point sets, routes as validated permutations
//! read as cycles, and the result record every solver returns.

mod point;
mod route;
mod solution;

pub(crate) use point::city_label;
pub use point::{GeoPoint, PointSet};
pub use route::{Leg, Route};
pub use solution::{SolutionStatus, SolveResult};
