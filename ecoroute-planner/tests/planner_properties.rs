//! Property-based tests for the nearest-neighbour planner.
//!
//! These assert invariants that must hold for every valid input,
//! complementing the example-driven behaviour tests.
//!
//! # Invariants tested
//!
//! - **Closed loop:** the path starts and ends at the depot and holds
//!   `deliveries + 2` coordinates.
//! - **Distance accounting:** `total_distance` is non-negative and equals
//!   the sum of consecutive path segments.
//! - **Coverage:** every delivery location appears in the path.
//! - **Determinism:** replanning the same request yields the same route.


use ecoroute_core::{geometry, RoutePlanner};
use ecoroute_planner::NearestNeighbourPlanner;
use proptest::prelude::*;

use proptest_support::{coord_strategy, delivery_set_strategy, request};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn path_is_a_closed_loop_over_all_deliveries(
        depot in coord_strategy(),
        deliveries in delivery_set_strategy(0, 30),
    ) {
        let req = request(depot, deliveries);
        let response = NearestNeighbourPlanner.plan(&req).expect("valid request");

        prop_assert_eq!(response.route.path.len(), req.deliveries.len() + 2);
        prop_assert_eq!(response.route.path.first(), Some(&depot));
        prop_assert_eq!(response.route.path.last(), Some(&depot));
    }

    #[test]
    fn total_distance_matches_the_path(
        depot in coord_strategy(),
        deliveries in delivery_set_strategy(0, 30),
    ) {
        let req = request(depot, deliveries);
        let response = NearestNeighbourPlanner.plan(&req).expect("valid request");

        prop_assert!(response.route.total_distance >= 0.0);
        let reconstructed = geometry::path_length(&response.route.path);
        prop_assert!(
            (response.route.total_distance - reconstructed).abs() < 1e-9,
            "reported {} but path sums to {}",
            response.route.total_distance,
            reconstructed
        );
    }

    #[test]
    fn every_delivery_is_covered(
        depot in coord_strategy(),
        deliveries in delivery_set_strategy(1, 20),
    ) {
        let req = request(depot, deliveries);
        let response = NearestNeighbourPlanner.plan(&req).expect("valid request");

        for delivery in &req.deliveries {
            prop_assert!(
                response.route.path.contains(&delivery.location),
                "delivery {} at {:?} missing from the path",
                delivery.id,
                delivery.location
            );
        }
    }

    #[test]
    fn planning_is_deterministic(
        depot in coord_strategy(),
        deliveries in delivery_set_strategy(0, 20),
    ) {
        let req = request(depot, deliveries);
        let planner = NearestNeighbourPlanner;

        let first = planner.plan(&req).expect("valid request");
        let second = planner.plan(&req).expect("valid request");

        prop_assert_eq!(first.route.path, second.route.path);
        prop_assert_eq!(first.route.total_distance, second.route.total_distance);
    }

    #[test]
    fn energy_bookkeeping_is_consistent(
        depot in coord_strategy(),
        deliveries in delivery_set_strategy(0, 20),
    ) {
        let req = request(depot, deliveries);
        let response = NearestNeighbourPlanner.plan(&req).expect("valid request");
        let route = &response.route;

        let expected_used = route.total_distance * req.vehicle.consumption_rate;
        prop_assert!((route.energy_used - expected_used).abs() < 1e-9);
        let expected_remaining = req.vehicle.max_energy - route.energy_used;
        prop_assert!((route.remaining_energy - expected_remaining).abs() < 1e-9);
    }
}
