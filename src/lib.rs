//! Facade crate for the EcoRoute delivery planning engine.
//!
//! This crate re-exports the core domain types and exposes the
//! nearest-neighbour planner implementation behind a feature flag.

#![forbid(unsafe_code)]

pub use ecoroute_core::{
    geometry, ChargingStation, Delivery, Depot, Diagnostics, InMemoryStationStore,
    InMemoryVehicleStore, Item, PlanError, PlanRequest, PlanResponse, Route, RoutePlanner,
    StationStore, StationStoreError, Vehicle, VehicleConfigError, VehicleError, VehicleStore,
    VehicleStoreError,
};

#[cfg(feature = "planner-nn")]
pub use ecoroute_planner::NearestNeighbourPlanner;
