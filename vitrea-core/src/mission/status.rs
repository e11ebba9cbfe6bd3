//! Mission status snapshot

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::MissionError;
use crate::model::Point3;
use crate::resource::ResourceEvent;
use crate::state::Mode;

/// Read-only view of the mission for operators
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MissionStatus {
    pub mode: Mode,
    pub battery_level: u8,
    pub fluid_level: u8,
    pub windows_cleaned: u16,
    pub windows_total: u16,
    /// Most severe resource event from the latest check
    pub resource_event: ResourceEvent,
    pub consecutive_faults: u8,
    /// Most recent error this mission
    pub last_error: Option<MissionError>,
    pub position: Point3,
    /// An abort was requested and not yet honored
    pub abort_pending: bool,
    /// Control cycles run since power-on
    pub cycle: u32,
}

impl MissionStatus {
    /// Check if every detected window has been cleaned
    pub fn all_cleaned(&self) -> bool {
        self.windows_cleaned == self.windows_total
    }
}
