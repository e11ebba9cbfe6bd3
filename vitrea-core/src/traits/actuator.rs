//! Cleaning actuator trait

use crate::model::WindowTarget;

/// Outcome of a physical cleaning action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorReport {
    /// Spray and wipe pass completed
    Success,
    /// Mechanism failure (jam, no pressure) or no acknowledgement
    Fault,
}

/// Spray / wiper mechanism
pub trait CleaningActuator {
    /// Perform one cleaning pass over `window`
    fn apply_cleaning_action(&mut self, window: &WindowTarget) -> ActuatorReport;
}
