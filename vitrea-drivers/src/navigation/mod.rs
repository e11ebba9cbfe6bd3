//! Navigation
//!
//! Flight controller adapters implementing `Navigator`.

pub mod simulated;

pub use simulated::{NavigatorConfig, SimulatedNavigator};
