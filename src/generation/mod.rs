//! Reproducible point sets.
//!
//! The generator is a locally owned [`StdRng`](rand::rngs::StdRng) seeded
//! from the caller's seed and passed down explicitly; no process-wide random
//! state is touched.

mod coordinates;

pub use coordinates::{generate_coordinates, generate_with_rng, TourRequest};
