//! Mission error taxonomy

use core::fmt;

use crate::model::WindowId;
use crate::state::Mode;

/// Errors surfaced by mission operations and recorded in the status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissionError {
    /// Operation not permitted in the current mode; nothing changed
    InvalidState { mode: Mode },
    /// Battery or fluid exhausted before an action
    InsufficientResource,
    /// Cleaning mechanism reported a failure
    ActuatorFault { window: WindowId },
    /// Navigation leg was not acknowledged before its deadline
    NavigationTimeout,
    /// Fault budget exhausted; the mission cycle is over
    CriticalFailure,
}

impl fmt::Display for MissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissionError::InvalidState { mode } => {
                write!(f, "operation not permitted in mode {:?}", mode)
            }
            MissionError::InsufficientResource => f.write_str("insufficient battery or fluid"),
            MissionError::ActuatorFault { window } => {
                write!(f, "cleaning actuator fault on window {}", window.0)
            }
            MissionError::NavigationTimeout => f.write_str("navigation not acknowledged in time"),
            MissionError::CriticalFailure => f.write_str("critical failure"),
        }
    }
}
