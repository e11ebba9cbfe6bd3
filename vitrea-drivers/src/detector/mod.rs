//! Window detection
//!
//! - Scanner: turns raw corner detections into window targets
//! - Scripted detector: replays a fixed detection set for bench runs

pub mod scanner;
pub mod scripted;

pub use scanner::{Detection, FacadeScanner};
pub use scripted::ScriptedDetector;
