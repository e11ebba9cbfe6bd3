//! Resource monitoring
//!
//! Evaluates battery and fluid levels against the configured thresholds.

pub mod monitor;

pub use monitor::{ResourceEvent, ResourceMonitor, ResourceReport};
