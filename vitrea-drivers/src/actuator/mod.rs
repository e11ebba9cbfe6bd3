//! Cleaning actuator
//!
//! Spray-and-wipe head adapters implementing `CleaningActuator`.

pub mod simulated;

pub use simulated::SimulatedActuator;
