//! Constructive heuristics for building tours.
//!
//! - [`NearestNeighbor`] — greedy nearest-neighbor construction, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::{solve_greedy, NearestNeighbor};
