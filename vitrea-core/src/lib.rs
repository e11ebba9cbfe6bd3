//! Board-agnostic mission logic for the window cleaning drone
//!
//! This crate contains all decision logic that does not depend on the
//! vision, flight-control or actuator hardware:
//!
//! - Collaborator traits (window detector, navigation, cleaning actuator)
//! - Mission state machine and its transition table
//! - Path planning over facade windows
//! - Resource monitoring and the safety override logic
//! - Cleaning execution and maintenance
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod error;
pub mod executor;
pub mod maintenance;
pub mod mission;
pub mod model;
pub mod planner;
pub mod resource;
pub mod safety;
pub mod state;
pub mod traits;

pub use error::MissionError;
pub use mission::{MissionStateMachine, MissionStatus};
