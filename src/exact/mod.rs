//! Exact tour search.
//!
//! - [`BruteForce`] — exhaustive search over orderings, O(n!·n)
//! - [`next_permutation`] — the lexicographic stepping it is built on

mod brute_force;
mod permutation;

pub use brute_force::{solve_brute_force, BruteForce, CancelFlag};
pub use permutation::next_permutation;
