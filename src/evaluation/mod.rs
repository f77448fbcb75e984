//! Tour evaluation: cycle lengths and optimality gaps.

mod evaluator;

pub use evaluator::{cycle_distance, optimality_gap, path_distance};
