//! Tour length evaluation.

use crate::distance::DistanceMatrix;

/// Length of the open path through `order`, without the closing edge.
///
/// Edges are summed front to back.
pub fn path_distance(distances: &DistanceMatrix, order: &[usize]) -> f64 {
    order
        .windows(2)
        .map(|w| distances.get(w[0], w[1]))
        .sum()
}

/// Length of the closed tour through `order`.
///
/// Sums consecutive edges front to back, then adds the edge from the last
/// index back to the first. Zero for fewer than two indices.
///
/// # Panics
///
/// Panics if `order` holds an index outside `distances`.
///
/// # Examples
///
/// ```
/// use geotour::distance::DistanceMatrix;
/// use geotour::evaluation::cycle_distance;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 2.0,
///     1.0, 0.0, 1.0,
///     2.0, 1.0, 0.0,
/// ]).unwrap();
/// assert_eq!(cycle_distance(&dm, &[0, 1, 2]), 4.0);
/// assert_eq!(cycle_distance(&dm, &[1]), 0.0);
/// ```
pub fn cycle_distance(distances: &DistanceMatrix, order: &[usize]) -> f64 {
    match (order.first(), order.last()) {
        (Some(&first), Some(&last)) if order.len() > 1 => {
            path_distance(distances, order) + distances.get(last, first)
        }
        _ => 0.0,
    }
}

/// Relative excess of `candidate` over `optimal`, in percent.
///
/// Zero when `optimal` is zero, since every tour of fewer than two distinct
/// locations has zero length.
pub fn optimality_gap(candidate: f64, optimal: f64) -> f64 {
    if optimal > 0.0 {
        (candidate - optimal) / optimal * 100.0
    } else {
        0.0
    }
}
