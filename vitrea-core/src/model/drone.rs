//! Drone state record
//!
//! The mission state machine is the only writer. Resource levels only go
//! down through [`ResourceDraw`]s and only go up through the maintenance
//! service.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::geometry::Point3;
use crate::state::Mode;

/// Full battery / fluid level (percent)
pub const FULL_LEVEL: u8 = 100;

/// Resource consumption request
///
/// Produced by components that spend resources and applied by the
/// state machine, which owns the drone state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResourceDraw {
    /// Battery percentage points to consume
    pub battery: u8,
    /// Fluid percentage points to consume
    pub fluid: u8,
}

impl ResourceDraw {
    pub const fn new(battery: u8, fluid: u8) -> Self {
        Self { battery, fluid }
    }
}

/// Mutable drone record
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DroneState {
    mode: Mode,
    position: Point3,
    home_position: Point3,
    battery_level: u8,
    fluid_level: u8,
}

impl DroneState {
    /// Grounded, idle drone at `home` with full battery and fluid
    pub const fn new(home: Point3) -> Self {
        Self {
            mode: Mode::Idle,
            position: home,
            home_position: home,
            battery_level: FULL_LEVEL,
            fluid_level: FULL_LEVEL,
        }
    }

    /// Start from arbitrary resource levels (clamped to 0..=100)
    pub fn with_levels(mut self, battery: u8, fluid: u8) -> Self {
        self.battery_level = battery.min(FULL_LEVEL);
        self.fluid_level = fluid.min(FULL_LEVEL);
        self
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn position(&self) -> Point3 {
        self.position
    }

    pub const fn home_position(&self) -> Point3 {
        self.home_position
    }

    pub const fn battery_level(&self) -> u8 {
        self.battery_level
    }

    pub const fn fluid_level(&self) -> u8 {
        self.fluid_level
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub(crate) fn set_position(&mut self, position: Point3) {
        self.position = position;
    }

    pub(crate) fn set_home_position(&mut self, home: Point3) {
        self.home_position = home;
    }

    /// Apply a consumption request, saturating at zero
    pub(crate) fn apply_draw(&mut self, draw: ResourceDraw) {
        self.battery_level = self.battery_level.saturating_sub(draw.battery);
        self.fluid_level = self.fluid_level.saturating_sub(draw.fluid);
    }

    pub(crate) fn fill_battery(&mut self) {
        self.battery_level = FULL_LEVEL;
    }

    pub(crate) fn fill_fluid(&mut self) {
        self.fluid_level = FULL_LEVEL;
    }

    /// Battery and fluid are both full
    pub const fn is_fully_serviced(&self) -> bool {
        self.battery_level == FULL_LEVEL && self.fluid_level == FULL_LEVEL
    }
}
