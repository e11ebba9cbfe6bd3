//! Mission data model
//!
//! Drone state, window targets and the geometry they are expressed in.

pub mod drone;
pub mod geometry;
pub mod window;

pub use drone::{DroneState, ResourceDraw, FULL_LEVEL};
pub use geometry::{FacadePoint, Point3};
pub use window::{WindowId, WindowSize, WindowTarget, MAX_WINDOWS};
