//! Delivery stops.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single stop the vehicle must visit exactly once.
///
/// The entity is immutable: visited/unvisited progress is tracked inside a
/// planner invocation, never on the delivery itself, so the same slice of
/// deliveries can be planned repeatedly or shared across concurrent runs.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use ecoroute_core::Delivery;
///
/// let delivery = Delivery::new(1, Coord { x: 2.0, y: 3.0 });
/// assert_eq!(delivery.id, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Delivery {
    /// Unique identifier.
    pub id: u64,
    /// Drop-off position.
    pub location: Coord<f64>,
}

impl Delivery {
    /// Construct a delivery at the given location.
    pub fn new(id: u64, location: Coord<f64>) -> Self {
        Self { id, location }
    }
}
