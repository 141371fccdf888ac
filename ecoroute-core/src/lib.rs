//! Core domain types for the EcoRoute engine.
//!
//! These models provide basic validation to keep downstream components
//! honest. Fallible constructors return `Result` to surface invalid input
//! early; the planner itself assumes validated requests.

#![forbid(unsafe_code)]

pub mod delivery;
pub mod depot;
pub mod geometry;
pub mod planner;
pub mod route;
pub mod station;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod vehicle;

pub use delivery::Delivery;
pub use depot::Depot;
pub use planner::{Diagnostics, PlanError, PlanRequest, PlanResponse, RoutePlanner};
pub use route::Route;
pub use station::ChargingStation;
pub use store::{
    InMemoryStationStore, InMemoryVehicleStore, StationStore, StationStoreError, VehicleStore,
    VehicleStoreError,
};
pub use vehicle::{Item, Vehicle, VehicleConfigError, VehicleError, DEFAULT_CONSUMPTION_RATE};
