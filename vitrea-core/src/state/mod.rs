//! Mission state machine
//!
//! Defines the authoritative flight behavior of the drone.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Trigger;
pub use machine::Mode;
