//! Test-only helpers shared by unit, behaviour, and property tests.

use geo::Coord;

use crate::{Delivery, Depot, PlanRequest, Vehicle};

/// Build a delivery at `(x, y)`.
pub fn delivery(id: u64, x: f64, y: f64) -> Delivery {
    Delivery::new(id, Coord { x, y })
}

/// Depot at the origin.
pub fn depot_at_origin() -> Depot {
    Depot::new(Coord { x: 0.0, y: 0.0 })
}

/// The worked four-stop example: depot at the origin, deliveries at
/// (2,3), (5,1), (6,4), and (8,2). Nearest-neighbour visits them in
/// exactly that order.
pub fn four_stop_request() -> PlanRequest {
    PlanRequest {
        vehicle: Vehicle::new(1, 100.0),
        depot: depot_at_origin(),
        deliveries: vec![
            delivery(1, 2.0, 3.0),
            delivery(2, 5.0, 1.0),
            delivery(3, 6.0, 4.0),
            delivery(4, 8.0, 2.0),
        ],
    }
}
