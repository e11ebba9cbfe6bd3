//! Mission orchestration
//!
//! The state machine owns the drone state and sequences every other
//! component, one control cycle per [`MissionStateMachine::step`].

pub mod controller;
pub mod status;

pub use controller::MissionStateMachine;
pub use status::MissionStatus;
