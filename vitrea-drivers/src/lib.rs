//! Collaborator implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in vitrea-core for the drone's collaborators:
//!
//! - Window detection (corner quads to facade window targets)
//! - Navigation (kinematic flight model with leg deadlines)
//! - Cleaning actuator (scripted spray-and-wipe head)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod actuator;
pub mod detector;
pub mod navigation;

pub use actuator::SimulatedActuator;
pub use detector::{Detection, FacadeScanner, ScriptedDetector};
pub use navigation::{NavigatorConfig, SimulatedNavigator};
