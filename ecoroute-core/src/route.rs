//! Planned routes and their derived energy bookkeeping.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Vehicle;

/// The result of one planning call: a closed path plus distance and energy
/// accounting.
///
/// The path always begins and ends with the depot location. With `n`
/// deliveries the path holds `n + 2` coordinates; with none it degenerates
/// to `[depot, depot]`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use ecoroute_core::{Route, Vehicle};
///
/// let depot = Coord { x: 0.0, y: 0.0 };
/// let route = Route::new(Vehicle::new(1, 100.0), vec![depot, depot], 0.0);
/// assert_eq!(route.energy_used, 0.0);
/// assert!(route.is_feasible());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    /// Vehicle the route was planned for.
    pub vehicle: Vehicle,
    /// Ordered coordinates visited, depot first and last.
    pub path: Vec<Coord<f64>>,
    /// Sum of the path's consecutive segment distances.
    pub total_distance: f64,
    /// Energy the route consumes: `total_distance * consumption_rate`.
    pub energy_used: f64,
    /// Capacity left after the route, measured from a full charge.
    pub remaining_energy: f64,
}

impl Route {
    /// Assemble a route result from a closed path and its total distance.
    ///
    /// Energy accounting is derived, not enforced. `remaining_energy` is
    /// measured against the vehicle's maximum capacity rather than its
    /// current charge: the figure answers "could this vehicle do the round
    /// trip on a full battery", not "can it do it right now". It goes
    /// negative for infeasible routes instead of failing.
    pub fn new(vehicle: Vehicle, path: Vec<Coord<f64>>, total_distance: f64) -> Self {
        let energy_used = total_distance * vehicle.consumption_rate;
        let remaining_energy = vehicle.max_energy - energy_used;
        Self {
            vehicle,
            path,
            total_distance,
            energy_used,
            remaining_energy,
        }
    }

    /// Whether the vehicle could complete the route on a full charge.
    ///
    /// A future energy-aware planner would use this to decide that a detour
    /// via a charging station is needed.
    pub fn is_feasible(&self) -> bool {
        self.remaining_energy >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn out_and_back(distance: f64) -> Vec<Coord<f64>> {
        vec![
            Coord { x: 0.0, y: 0.0 },
            Coord {
                x: distance / 2.0,
                y: 0.0,
            },
            Coord { x: 0.0, y: 0.0 },
        ]
    }

    #[rstest]
    fn energy_is_derived_from_distance_and_rate() {
        let route = Route::new(Vehicle::new(1, 100.0), out_and_back(40.0), 40.0);
        assert!((route.energy_used - 2.0).abs() < 1e-12);
        assert!((route.remaining_energy - 98.0).abs() < 1e-12);
    }

    #[rstest]
    fn remaining_energy_uses_full_capacity_not_current_charge() {
        let vehicle =
            Vehicle::with_config(1, 100.0, 5.0, 0.05, Vec::new()).expect("valid vehicle");
        let route = Route::new(vehicle, out_and_back(40.0), 40.0);
        // 100 - 2, not 5 - 2.
        assert!((route.remaining_energy - 98.0).abs() < 1e-12);
    }

    #[rstest]
    fn infeasible_route_reports_negative_remainder() {
        let route = Route::new(Vehicle::new(1, 1.0), out_and_back(100.0), 100.0);
        assert!(route.remaining_energy < 0.0);
        assert!(!route.is_feasible());
    }
}
