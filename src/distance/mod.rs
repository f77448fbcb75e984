//! Great-circle distances.
//!
//! Provides the haversine distance between two points and a dense distance
//! matrix built from a point set.

mod haversine;
mod matrix;

pub use haversine::{haversine, haversine_km, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
