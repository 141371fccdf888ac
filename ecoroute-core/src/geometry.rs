//! Euclidean geometry helpers shared by the planner and its callers.

use geo::Coord;

/// Euclidean distance between two coordinates.
///
/// Pure and total: defined for every pair of finite coordinates, symmetric,
/// and satisfying the triangle inequality. The nearest-neighbour heuristic
/// leans on those properties implicitly.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use ecoroute_core::geometry::distance;
///
/// let d = distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 });
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
pub fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Total length of a polyline, summed over consecutive segments.
///
/// Empty and single-point paths have length zero. Used to reconstruct a
/// route's `total_distance` exactly from its `path`.
pub fn path_length(path: &[Coord<f64>]) -> f64 {
    path.windows(2).map(|pair| distance(pair[0], pair[1])).sum()
}
