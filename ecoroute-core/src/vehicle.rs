//! Vehicles and their energy and cargo bookkeeping.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default energy consumed per unit of distance travelled.
pub const DEFAULT_CONSUMPTION_RATE: f64 = 0.05;

/// A cargo item carried by a [`Vehicle`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Unique identifier.
    pub id: u64,
    /// Human-readable description of the item.
    pub description: String,
}

/// Errors returned by the vehicle state mutations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VehicleError {
    /// The requested trip needs more energy than the current charge holds.
    #[error("insufficient energy: trip needs {required} but only {available} is charged")]
    InsufficientEnergy {
        /// Energy the trip would consume.
        required: f64,
        /// Charge available before the trip.
        available: f64,
    },
    /// There is nothing left in the cargo to deliver.
    #[error("vehicle cargo is empty")]
    EmptyCargo,
}

/// Errors returned by [`Vehicle::with_config`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VehicleConfigError {
    /// An energy value was NaN or infinite, or the capacity was negative.
    #[error("energy values must be finite and the capacity non-negative")]
    InvalidEnergy,
    /// The current charge fell outside `[0, max_energy]`.
    #[error("current energy {current} outside [0, {max}]")]
    EnergyOutOfRange {
        /// Charge supplied by the caller.
        current: f64,
        /// Capacity of the vehicle.
        max: f64,
    },
    /// The consumption rate was zero, negative, or not finite.
    #[error("consumption rate must be positive and finite, got {rate}")]
    InvalidConsumptionRate {
        /// Rate supplied by the caller.
        rate: f64,
    },
}

/// A delivery vehicle with an energy budget and ordered cargo.
///
/// Invariants: `current_energy` stays in `[0, max_energy]` and
/// `consumption_rate` is positive. [`Vehicle::with_config`] enforces them at
/// construction; [`Vehicle::consume_energy`] preserves them afterwards.
///
/// # Examples
/// ```
/// use ecoroute_core::Vehicle;
///
/// let vehicle = Vehicle::new(1, 100.0);
/// assert_eq!(vehicle.current_energy, 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vehicle {
    /// Unique identifier.
    pub id: u64,
    /// Maximum energy capacity.
    pub max_energy: f64,
    /// Charge currently available.
    pub current_energy: f64,
    /// Energy consumed per unit of distance travelled.
    pub consumption_rate: f64,
    /// Items still on board, delivered front-first.
    pub cargo: Vec<Item>,
}

impl Vehicle {
    /// Construct a fully charged vehicle with the default consumption rate
    /// and no cargo. `max_energy` is expected to be finite and non-negative.
    pub fn new(id: u64, max_energy: f64) -> Self {
        Self {
            id,
            max_energy,
            current_energy: max_energy,
            consumption_rate: DEFAULT_CONSUMPTION_RATE,
            cargo: Vec::new(),
        }
    }

    /// Construct a vehicle with explicit state, validating the invariants.
    pub fn with_config(
        id: u64,
        max_energy: f64,
        current_energy: f64,
        consumption_rate: f64,
        cargo: Vec<Item>,
    ) -> Result<Self, VehicleConfigError> {
        let vehicle = Self {
            id,
            max_energy,
            current_energy,
            consumption_rate,
            cargo,
        };
        vehicle.validate()?;
        Ok(vehicle)
    }

    /// Check the vehicle invariants without consuming the value.
    pub fn validate(&self) -> Result<(), VehicleConfigError> {
        if !self.max_energy.is_finite() || !self.current_energy.is_finite() || self.max_energy < 0.0
        {
            return Err(VehicleConfigError::InvalidEnergy);
        }
        if self.current_energy < 0.0 || self.current_energy > self.max_energy {
            return Err(VehicleConfigError::EnergyOutOfRange {
                current: self.current_energy,
                max: self.max_energy,
            });
        }
        if !self.consumption_rate.is_finite() || self.consumption_rate <= 0.0 {
            return Err(VehicleConfigError::InvalidConsumptionRate {
                rate: self.consumption_rate,
            });
        }
        Ok(())
    }

    /// Deduct the energy needed to travel `distance` from the current charge.
    ///
    /// `distance` is expected to be non-negative. Fails without touching the
    /// charge when the trip would need more energy than is available.
    ///
    /// # Errors
    /// [`VehicleError::InsufficientEnergy`] when
    /// `current_energy < distance * consumption_rate`.
    pub fn consume_energy(&mut self, distance: f64) -> Result<(), VehicleError> {
        let required = distance * self.consumption_rate;
        if self.current_energy < required {
            return Err(VehicleError::InsufficientEnergy {
                required,
                available: self.current_energy,
            });
        }
        self.current_energy -= required;
        Ok(())
    }

    /// Remove and return the item at the front of the cargo.
    ///
    /// # Errors
    /// [`VehicleError::EmptyCargo`] when there is nothing left on board; the
    /// cargo is left untouched.
    pub fn deliver_item(&mut self) -> Result<Item, VehicleError> {
        if self.cargo.is_empty() {
            return Err(VehicleError::EmptyCargo);
        }
        Ok(self.cargo.remove(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn loaded_vehicle() -> Vehicle {
        let cargo = vec![
            Item {
                id: 1,
                description: "parcel".into(),
            },
            Item {
                id: 2,
                description: "crate".into(),
            },
        ];
        Vehicle::with_config(7, 100.0, 80.0, 0.05, cargo).expect("valid vehicle")
    }

    #[rstest]
    fn new_vehicle_starts_fully_charged() {
        let vehicle = Vehicle::new(1, 50.0);
        assert_eq!(vehicle.current_energy, 50.0);
        assert_eq!(vehicle.consumption_rate, DEFAULT_CONSUMPTION_RATE);
        assert!(vehicle.cargo.is_empty());
    }

    #[rstest]
    fn consume_energy_decrements_charge(mut loaded_vehicle: Vehicle) {
        loaded_vehicle
            .consume_energy(100.0)
            .expect("enough charge for 100 units");
        assert!((loaded_vehicle.current_energy - 75.0).abs() < 1e-12);
    }

    #[rstest]
    fn consume_energy_rejects_trip_beyond_charge() {
        let mut vehicle = Vehicle::with_config(1, 100.0, 10.0, 0.05, Vec::new()).expect("valid");
        let err = vehicle.consume_energy(1000.0).expect_err("50 > 10");
        assert_eq!(
            err,
            VehicleError::InsufficientEnergy {
                required: 50.0,
                available: 10.0,
            }
        );
        // Charge must be left untouched by the failed mutation.
        assert_eq!(vehicle.current_energy, 10.0);
    }

    #[rstest]
    fn deliver_item_pops_front(mut loaded_vehicle: Vehicle) {
        let item = loaded_vehicle.deliver_item().expect("cargo present");
        assert_eq!(item.id, 1);
        assert_eq!(loaded_vehicle.cargo.len(), 1);
    }

    #[rstest]
    fn deliver_item_rejects_empty_cargo() {
        let mut vehicle = Vehicle::new(1, 100.0);
        let err = vehicle.deliver_item().expect_err("no cargo");
        assert_eq!(err, VehicleError::EmptyCargo);
        assert!(vehicle.cargo.is_empty());
    }

    #[rstest]
    #[case(100.0, 120.0, 0.05)] // charge above capacity
    #[case(100.0, -1.0, 0.05)] // negative charge
    #[case(-10.0, 0.0, 0.05)] // negative capacity
    #[case(100.0, 50.0, 0.0)] // zero rate
    #[case(100.0, 50.0, -0.5)] // negative rate
    fn with_config_rejects_invalid_state(
        #[case] max: f64,
        #[case] current: f64,
        #[case] rate: f64,
    ) {
        assert!(Vehicle::with_config(1, max, current, rate, Vec::new()).is_err());
    }

    #[rstest]
    fn with_config_rejects_non_finite_energy() {
        let result = Vehicle::with_config(1, f64::NAN, 0.0, 0.05, Vec::new());
        assert_eq!(result, Err(VehicleConfigError::InvalidEnergy));
    }
}
