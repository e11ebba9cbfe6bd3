//! Configuration type definitions
//!
//! Thresholds and per-action costs are tuning values, not physical
//! constants; the defaults here are the reference values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::planner::Strategy;

/// Default fault budget (consecutive faults before critical failure)
pub const DEFAULT_FAULT_BUDGET: u8 = 3;

/// Resource thresholds (percent)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResourceThresholds {
    /// Battery below this is low
    pub low_battery: u8,
    /// Battery at or below this is critical
    pub critical_battery: u8,
    /// Fluid below this is low
    pub low_fluid: u8,
    /// Fluid at or below this is empty
    pub empty_fluid: u8,
}

impl Default for ResourceThresholds {
    fn default() -> Self {
        Self {
            low_battery: 30,
            critical_battery: 10,
            low_fluid: 20,
            empty_fluid: 0,
        }
    }
}

/// Resources consumed by one cleaning action (percentage points)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionCost {
    pub battery: u8,
    pub fluid: u8,
}

impl Default for ActionCost {
    fn default() -> Self {
        Self {
            battery: 8,
            fluid: 10,
        }
    }
}

/// What to do when a low (not yet critical) resource level is seen
/// while cleaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LowResourcePolicy {
    /// Keep cleaning; the safety override still returns at critical/empty
    #[default]
    FinishRoute,
    /// Return as soon as battery or fluid is low
    ReturnOnLow,
}

/// Configuration validation and encoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Thresholds out of range or in the wrong order
    InvalidThresholds,
    /// Fault budget must allow at least one fault
    ZeroFaultBudget,
    /// Negative or non-finite distance
    InvalidGeometry,
    /// Binary encoding failed (buffer too small)
    Encode,
    /// Binary decoding failed
    Decode,
    /// TOML document could not be parsed
    TomlParse,
}

/// Mission configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MissionConfig {
    /// Resource thresholds for the monitor
    pub thresholds: ResourceThresholds,
    /// Per-action resource cost
    pub cost: ActionCost,
    /// Consecutive faults tolerated before critical failure
    pub fault_budget: u8,
    /// Route strategy
    pub strategy: Strategy,
    /// Height band (m) within which windows share a zigzag row
    pub row_tolerance_m: f32,
    /// Altitude above home reached during takeoff (m)
    pub takeoff_altitude_m: f32,
    /// Hover distance in front of the facade while cleaning (m)
    pub standoff_m: f32,
    /// Vertical gap between wipe passes across a window (m)
    pub wipe_spacing_m: f32,
    /// Reaction to low resources during cleaning
    pub low_resource_policy: LowResourcePolicy,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            thresholds: ResourceThresholds::default(),
            cost: ActionCost::default(),
            fault_budget: DEFAULT_FAULT_BUDGET,
            strategy: Strategy::Zigzag,
            row_tolerance_m: 0.5,
            takeoff_altitude_m: 5.0,
            standoff_m: 0.5,
            wipe_spacing_m: 0.3,
            low_resource_policy: LowResourcePolicy::FinishRoute,
        }
    }
}

impl MissionConfig {
    /// Check configuration consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        if t.low_battery > 100 || t.low_fluid > 100 {
            return Err(ConfigError::InvalidThresholds);
        }
        if t.critical_battery >= t.low_battery || t.empty_fluid >= t.low_fluid {
            return Err(ConfigError::InvalidThresholds);
        }
        if self.fault_budget == 0 {
            return Err(ConfigError::ZeroFaultBudget);
        }
        for distance in [self.row_tolerance_m, self.takeoff_altitude_m, self.standoff_m] {
            if !distance.is_finite() || distance < 0.0 {
                return Err(ConfigError::InvalidGeometry);
            }
        }
        if !self.wipe_spacing_m.is_finite() || self.wipe_spacing_m <= 0.0 {
            return Err(ConfigError::InvalidGeometry);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_reference_values() {
        let config = MissionConfig::default();
        assert_eq!(config.thresholds.low_battery, 30);
        assert_eq!(config.thresholds.critical_battery, 10);
        assert_eq!(config.thresholds.low_fluid, 20);
        assert_eq!(config.thresholds.empty_fluid, 0);
        assert_eq!(config.cost, ActionCost { battery: 8, fluid: 10 });
        assert_eq!(config.fault_budget, 3);
        assert_eq!(config.strategy, Strategy::Zigzag);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_threshold_order_enforced() {
        let mut config = MissionConfig::default();
        config.thresholds.critical_battery = 30;
        assert_eq!(config.validate(), Err(ConfigError::InvalidThresholds));

        let mut config = MissionConfig::default();
        config.thresholds.low_fluid = 120;
        assert_eq!(config.validate(), Err(ConfigError::InvalidThresholds));
    }

    #[test]
    fn test_zero_fault_budget_rejected() {
        let config = MissionConfig {
            fault_budget: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroFaultBudget));
    }

    #[test]
    fn test_negative_geometry_rejected() {
        let config = MissionConfig {
            standoff_m: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidGeometry));

        let config = MissionConfig {
            row_tolerance_m: f32::NAN,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidGeometry));
    }

    #[test]
    fn test_wipe_spacing_must_be_positive() {
        let config = MissionConfig {
            wipe_spacing_m: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidGeometry));

        let config = MissionConfig {
            wipe_spacing_m: f32::INFINITY,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidGeometry));
    }
}
