//! Repository abstractions for charging stations and vehicles.
//!
//! The `StationStore` and `VehicleStore` traits define the surfaces a
//! boundary layer uses to manage [`ChargingStation`] and [`Vehicle`]
//! entities. They are injected rather than process-global so tests get
//! isolated stores.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use geo::Coord;
use rand::Rng;
use thiserror::Error;

use crate::{ChargingStation, Item, Vehicle};

/// Errors returned by [`StationStore`] lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StationStoreError {
    /// No station exists under the given id.
    #[error("charging station {id} not found")]
    NotFound {
        /// Identifier the caller asked for.
        id: u64,
    },
}

/// Create, list, and delete charging stations.
///
/// Ids are assigned by the store, sequentially from 1. Implementations must
/// serialise writes internally and be `Send + Sync`; the planner never
/// touches the store, so it imposes no further constraints.
pub trait StationStore: Send + Sync {
    /// Register a new station and return it with its assigned id.
    fn create(&self, name: String, location: Coord<f64>, power: f64) -> ChargingStation;

    /// Return every stored station, ordered by id.
    fn find_all(&self) -> Vec<ChargingStation>;

    /// Look up a station by id.
    ///
    /// # Errors
    /// [`StationStoreError::NotFound`] when no station has the id.
    fn get(&self, id: u64) -> Result<ChargingStation, StationStoreError>;

    /// Remove a station by id.
    ///
    /// # Errors
    /// [`StationStoreError::NotFound`] when no station has the id, so a
    /// boundary layer can distinguish "no such entity" from success.
    fn delete(&self, id: u64) -> Result<(), StationStoreError>;
}

/// In-memory [`StationStore`] backed by a mutex-guarded map.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use ecoroute_core::{InMemoryStationStore, StationStore};
///
/// let store = InMemoryStationStore::default();
/// let station = store.create("North Hub".into(), Coord { x: 1.0, y: 2.0 }, 120.0);
/// assert_eq!(station.id, 1);
/// assert_eq!(store.find_all().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStationStore {
    stations: Mutex<HashMap<u64, ChargingStation>>,
    next_id: AtomicU64,
}

impl InMemoryStationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the store with `count` randomly placed stations.
    ///
    /// Locations are uniform in `[-100, 100)` on both axes and power is
    /// uniform in `[50, 150)` kW, matching the demo data of the original
    /// system. Pass a seeded rng for deterministic results.
    pub fn populate_random<R: Rng>(&self, count: usize, rng: &mut R) {
        for i in 0..count {
            let location = Coord {
                x: rng.gen_range(-100.0..100.0),
                y: rng.gen_range(-100.0..100.0),
            };
            let power = rng.gen_range(50.0..150.0);
            self.create(format!("Station {}", i + 1), location, power);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<u64, ChargingStation>> {
        self.stations.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StationStore for InMemoryStationStore {
    fn create(&self, name: String, location: Coord<f64>, power: f64) -> ChargingStation {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let station = ChargingStation {
            id,
            name,
            location,
            power,
        };
        self.lock().insert(id, station.clone());
        station
    }

    fn find_all(&self) -> Vec<ChargingStation> {
        let mut stations: Vec<ChargingStation> = self.lock().values().cloned().collect();
        stations.sort_unstable_by_key(|station| station.id);
        stations
    }

    fn get(&self, id: u64) -> Result<ChargingStation, StationStoreError> {
        self.lock()
            .get(&id)
            .cloned()
            .ok_or(StationStoreError::NotFound { id })
    }

    fn delete(&self, id: u64) -> Result<(), StationStoreError> {
        self.lock()
            .remove(&id)
            .map(|_| ())
            .ok_or(StationStoreError::NotFound { id })
    }
}

/// Errors returned by [`VehicleStore`] lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VehicleStoreError {
    /// No vehicle exists under the given id.
    #[error("vehicle {id} not found")]
    NotFound {
        /// Identifier the caller asked for.
        id: u64,
    },
}

/// Register and look up vehicles.
///
/// Unlike [`StationStore`], ids come from the caller: a vehicle arrives at
/// the boundary already identified. Registering an id twice replaces the
/// earlier entry.
pub trait VehicleStore: Send + Sync {
    /// Register a fully charged vehicle carrying `cargo` and return it.
    fn create(&self, id: u64, max_energy: f64, cargo: Vec<Item>) -> Vehicle;

    /// Look up a vehicle by id.
    ///
    /// # Errors
    /// [`VehicleStoreError::NotFound`] when no vehicle has the id.
    fn get(&self, id: u64) -> Result<Vehicle, VehicleStoreError>;
}

/// In-memory [`VehicleStore`] backed by a mutex-guarded map.
///
/// # Examples
/// ```
/// use ecoroute_core::{InMemoryVehicleStore, VehicleStore};
///
/// let store = InMemoryVehicleStore::default();
/// store.create(7, 100.0, Vec::new());
/// assert_eq!(store.get(7).expect("registered above").max_energy, 100.0);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryVehicleStore {
    vehicles: Mutex<HashMap<u64, Vehicle>>,
}

impl InMemoryVehicleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<u64, Vehicle>> {
        self.vehicles.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl VehicleStore for InMemoryVehicleStore {
    fn create(&self, id: u64, max_energy: f64, cargo: Vec<Item>) -> Vehicle {
        let mut vehicle = Vehicle::new(id, max_energy);
        vehicle.cargo = cargo;
        self.lock().insert(id, vehicle.clone());
        vehicle
    }

    fn get(&self, id: u64) -> Result<Vehicle, VehicleStoreError> {
        self.lock()
            .get(&id)
            .cloned()
            .ok_or(VehicleStoreError::NotFound { id })
    }
}
