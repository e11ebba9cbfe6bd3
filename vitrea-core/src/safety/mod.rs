//! Safety overrides
//!
//! Detects conditions that must preempt normal mission logic.

pub mod controller;

pub use controller::{FaultKind, OverrideReason, SafetyController, SafetyOverride, SafetyStatus};
