//! Great-circle distance on a spherical Earth.

use crate::models::GeoPoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two `(lat, lon)` positions
/// given in degrees, using the haversine formula.
///
/// ```text
/// a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
/// d = 2R · asin(√a)
/// ```
///
/// `a` is clamped to `[0, 1]`: near antipodal points rounding can push it
/// just past 1.
///
/// # Examples
///
/// ```
/// use geotour::distance::haversine_km;
///
/// // One degree of longitude on the equator.
/// let d = haversine_km(0.0, 0.0, 0.0, 1.0);
/// assert!((d - 111.19).abs() < 0.01);
/// assert_eq!(haversine_km(12.0, 34.0, 12.0, 34.0), 0.0);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let s1 = (d_phi / 2.0).sin();
    let s2 = (d_lambda / 2.0).sin();
    let a = (s1 * s1 + phi1.cos() * phi2.cos() * s2 * s2).clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Great-circle distance in kilometers between two points.
pub fn haversine(a: &GeoPoint, b: &GeoPoint) -> f64 {
    haversine_km(a.lat(), a.lon(), b.lat(), b.lon())
}
