//! Collaborator traits
//!
//! These traits define the interface between the mission logic and the
//! vision, flight-control and cleaning hardware. A hardware backend and
//! a deterministic test double both implement them.

pub mod actuator;
pub mod detector;
pub mod navigation;

pub use actuator::{ActuatorReport, CleaningActuator};
pub use detector::WindowDetector;
pub use navigation::{NavAck, Navigator, PositionSource};
