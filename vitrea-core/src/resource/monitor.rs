//! Resource monitor implementation
//!
//! Pure evaluation, called at the start of every control cycle.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::ResourceThresholds;
use crate::model::DroneState;

/// Resource condition signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResourceEvent {
    /// All levels above their low thresholds
    Normal,
    /// Battery below the low threshold
    LowBattery,
    /// Battery at or below the critical threshold
    CriticalBattery,
    /// Fluid below the low threshold
    LowFluid,
    /// Fluid at or below the empty threshold
    EmptyFluid,
}

impl ResourceEvent {
    /// Severity rank; battery events outrank fluid events
    ///
    /// Flight safety comes before cleaning capability.
    pub fn severity(&self) -> u8 {
        match self {
            ResourceEvent::Normal => 0,
            ResourceEvent::LowFluid => 1,
            ResourceEvent::EmptyFluid => 2,
            ResourceEvent::LowBattery => 3,
            ResourceEvent::CriticalBattery => 4,
        }
    }
}

/// Per-resource evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResourceReport {
    /// `Normal`, `LowBattery` or `CriticalBattery`
    pub battery: ResourceEvent,
    /// `Normal`, `LowFluid` or `EmptyFluid`
    pub fluid: ResourceEvent,
}

impl ResourceReport {
    /// Both resources normal
    pub const NORMAL: Self = Self {
        battery: ResourceEvent::Normal,
        fluid: ResourceEvent::Normal,
    };

    /// The single most severe event
    pub fn most_severe(&self) -> ResourceEvent {
        if self.battery.severity() >= self.fluid.severity() {
            self.battery
        } else {
            self.fluid
        }
    }

    pub fn is_normal(&self) -> bool {
        *self == Self::NORMAL
    }
}

/// Threshold evaluator for battery and fluid
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceMonitor {
    thresholds: ResourceThresholds,
}

impl ResourceMonitor {
    /// Create a monitor with the given thresholds
    pub fn new(thresholds: ResourceThresholds) -> Self {
        Self { thresholds }
    }

    /// Evaluate battery and fluid independently
    pub fn assess(&self, drone: &DroneState) -> ResourceReport {
        ResourceReport {
            battery: self.battery_event(drone.battery_level()),
            fluid: self.fluid_event(drone.fluid_level()),
        }
    }

    /// Most severe applicable event
    pub fn check(&self, drone: &DroneState) -> ResourceEvent {
        self.assess(drone).most_severe()
    }

    fn battery_event(&self, level: u8) -> ResourceEvent {
        if level <= self.thresholds.critical_battery {
            ResourceEvent::CriticalBattery
        } else if level < self.thresholds.low_battery {
            ResourceEvent::LowBattery
        } else {
            ResourceEvent::Normal
        }
    }

    fn fluid_event(&self, level: u8) -> ResourceEvent {
        if level <= self.thresholds.empty_fluid {
            ResourceEvent::EmptyFluid
        } else if level < self.thresholds.low_fluid {
            ResourceEvent::LowFluid
        } else {
            ResourceEvent::Normal
        }
    }
}
