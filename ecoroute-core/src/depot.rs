//! The depot a route starts and ends at.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed start and end point of every planned route.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use ecoroute_core::Depot;
///
/// let depot = Depot::new(Coord { x: 0.0, y: 0.0 });
/// assert_eq!(depot.location.x, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Depot {
    /// Position of the depot.
    pub location: Coord<f64>,
}

impl Depot {
    /// Construct a depot at the given location.
    pub fn new(location: Coord<f64>) -> Self {
        Self { location }
    }
}
