//! The planning seam: request, response, and the `RoutePlanner` trait.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Delivery, Depot, Route, Vehicle, VehicleConfigError};

/// Parameters for one planning call.
///
/// Deliveries are an ordered sequence: the planner breaks distance ties in
/// favour of the first-encountered delivery, so a stable input order makes
/// the result reproducible.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use ecoroute_core::{Delivery, Depot, PlanRequest, Vehicle};
///
/// let request = PlanRequest {
///     vehicle: Vehicle::new(1, 100.0),
///     depot: Depot::new(Coord { x: 0.0, y: 0.0 }),
///     deliveries: vec![Delivery::new(1, Coord { x: 2.0, y: 3.0 })],
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanRequest {
    /// Vehicle to plan for.
    pub vehicle: Vehicle,
    /// Start and end point of the route.
    pub depot: Depot,
    /// Stops to cover, each exactly once. May be empty.
    pub deliveries: Vec<Delivery>,
}

impl PlanRequest {
    /// Reject malformed input before planning.
    ///
    /// # Errors
    /// [`PlanError::NonFiniteCoordinate`] for NaN or infinite positions and
    /// [`PlanError::InvalidVehicle`] for vehicles violating their
    /// invariants.
    pub fn validate(&self) -> Result<(), PlanError> {
        let coordinates = std::iter::once(self.depot.location)
            .chain(self.deliveries.iter().map(|delivery| delivery.location));
        for location in coordinates {
            if !location.x.is_finite() || !location.y.is_finite() {
                return Err(PlanError::NonFiniteCoordinate);
            }
        }
        self.vehicle.validate()?;
        Ok(())
    }
}

/// Measurements taken while planning.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time the planning call took.
    pub plan_time: Duration,
    /// Number of deliveries sequenced into the route.
    pub deliveries_planned: u64,
}

/// Response from a successful planning call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanResponse {
    /// The planned round trip.
    pub route: Route,
    /// Planning measurements.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`RoutePlanner::plan`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A depot or delivery coordinate was NaN or infinite.
    #[error("request contains a non-finite coordinate")]
    NonFiniteCoordinate,
    /// The vehicle configuration violates its invariants.
    #[error("invalid vehicle configuration: {0}")]
    InvalidVehicle(#[from] VehicleConfigError),
}

/// Sequence a set of deliveries into a closed route from the depot.
///
/// Implementations should return a [`PlanError`] for invalid requests
/// rather than panicking, and must be `Send + Sync` to operate safely
/// across threads. Planning must not mutate the request: repeated calls on
/// the same input yield identical routes.
pub trait RoutePlanner: Send + Sync {
    /// Plan a request, producing a route or an error.
    fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, PlanError>;
}
