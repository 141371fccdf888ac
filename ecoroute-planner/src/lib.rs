//! Greedy nearest-neighbour implementation of the EcoRoute planning seam.
//!
//! The planner always moves to the closest unvisited delivery and closes
//! the loop back at the depot. It trades optimality for simplicity and
//! determinism; see [`NearestNeighbourPlanner`] for the contract.

#![forbid(unsafe_code)]

mod planner;

pub use planner::NearestNeighbourPlanner;
