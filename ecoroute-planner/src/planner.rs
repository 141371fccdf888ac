//! `NearestNeighbourPlanner` implementation.

use std::time::Instant;

use ecoroute_core::{
    geometry, Delivery, Diagnostics, PlanError, PlanRequest, PlanResponse, Route, RoutePlanner,
};
use geo::Coord;

/// Greedy nearest-neighbour route planner.
///
/// Sequencing is O(n²) in the number of deliveries: each step scans the
/// remaining unvisited stops for the closest one. No spatial index is
/// attempted; the planner is sized for per-vehicle routing of tens to low
/// hundreds of stops.
///
/// Visited marks live inside the planning call rather than on the
/// [`Delivery`] entities, so the same request can be planned repeatedly, or
/// concurrently from several threads, and always yields the same route.
///
/// Energy is accounted for but never enforced: an infeasible route comes
/// back with negative remaining energy instead of an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestNeighbourPlanner;

impl RoutePlanner for NearestNeighbourPlanner {
    fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, PlanError> {
        request.validate()?;
        let started_at = Instant::now();

        let deliveries = &request.deliveries;
        let depot = request.depot.location;

        let mut visited = vec![false; deliveries.len()];
        let mut path = Vec::with_capacity(deliveries.len() + 2);
        let mut total_distance = 0.0;
        let mut current = depot;
        path.push(current);

        while let Some((index, leg)) = nearest_unvisited(current, deliveries, &visited) {
            log::trace!(
                "hop to delivery {} at ({}, {}), leg {:.3}",
                deliveries[index].id,
                deliveries[index].location.x,
                deliveries[index].location.y,
                leg
            );
            visited[index] = true;
            total_distance += leg;
            current = deliveries[index].location;
            path.push(current);
        }

        // Close the loop, also when there was nothing to visit.
        total_distance += geometry::distance(current, depot);
        path.push(depot);

        log::debug!(
            "planned {} deliveries for vehicle {}, total distance {:.3}",
            deliveries.len(),
            request.vehicle.id,
            total_distance
        );

        let route = Route::new(request.vehicle.clone(), path, total_distance);
        let diagnostics = Diagnostics {
            plan_time: started_at.elapsed(),
            deliveries_planned: deliveries.len() as u64,
        };
        Ok(PlanResponse { route, diagnostics })
    }
}

/// Index and leg distance of the closest unvisited delivery, if any.
///
/// The strict `<` comparison keeps the first-encountered delivery on
/// distance ties, which makes the visiting order deterministic for a fixed
/// input order. Duplicate coordinates are distinct stops and are visited
/// one after the other at zero cost.
fn nearest_unvisited(
    current: Coord<f64>,
    deliveries: &[Delivery],
    visited: &[bool],
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, delivery) in deliveries.iter().enumerate() {
        if visited[index] {
            continue;
        }
        let leg = geometry::distance(current, delivery.location);
        if best.map_or(true, |(_, best_leg)| leg < best_leg) {
            best = Some((index, leg));
        }
    }
    best
}
