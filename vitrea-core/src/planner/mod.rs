//! Path planning
//!
//! Orders detected windows into a cleaning route and lays out the wipe
//! passes flown over each window.

pub mod path;
pub mod route;
pub mod wipe;

pub use path::{PathPlanner, PlanError, Strategy};
pub use route::CleaningRoute;
pub use wipe::WipePattern;
