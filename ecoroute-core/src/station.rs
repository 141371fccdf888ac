//! Charging stations.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A charging station the fleet could recharge at.
///
/// Stored by a [`crate::StationStore`] as plain data; the current planner
/// never consults stations. They exist for a future energy-aware variant
/// that would insert a recharge detour once a route's remaining energy goes
/// negative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChargingStation {
    /// Unique identifier, assigned by the store.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Position of the station.
    pub location: Coord<f64>,
    /// Charging power in kW.
    pub power: f64,
}
