//! Cleaning execution
//!
//! Runs one cleaning action against one window and reports what it cost.

pub mod cleaning;

pub use cleaning::{CleaningError, CleaningExecutor};
