//! Cleaning executor
//!
//! The executor never writes the drone state. It returns the resources
//! the attempt consumed as a [`ResourceDraw`] and the state machine
//! applies it.

use crate::config::ActionCost;
use crate::model::{DroneState, ResourceDraw, WindowTarget};
use crate::traits::{ActuatorReport, CleaningActuator};

/// Cleaning failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CleaningError {
    /// Battery or fluid already at zero; nothing attempted, nothing consumed
    InsufficientResource,
    /// Mechanism failed; the attempt still consumed `draw`
    ActuatorFault { draw: ResourceDraw },
}

/// Executes cleaning actions at a fixed per-action cost
#[derive(Debug, Clone, Copy, Default)]
pub struct CleaningExecutor {
    cost: ActionCost,
}

impl CleaningExecutor {
    pub fn new(cost: ActionCost) -> Self {
        Self { cost }
    }

    /// Clean `window`
    ///
    /// On success the window is marked cleaned and the per-action draw is
    /// returned. A fault leaves the window untouched.
    pub fn execute_cleaning<A: CleaningActuator>(
        &self,
        window: &mut WindowTarget,
        drone: &DroneState,
        actuator: &mut A,
    ) -> Result<ResourceDraw, CleaningError> {
        if drone.fluid_level() == 0 || drone.battery_level() == 0 {
            return Err(CleaningError::InsufficientResource);
        }

        let draw = ResourceDraw::new(self.cost.battery, self.cost.fluid);
        match actuator.apply_cleaning_action(window) {
            ActuatorReport::Success => {
                window.mark_cleaned();
                Ok(draw)
            }
            ActuatorReport::Fault => Err(CleaningError::ActuatorFault { draw }),
        }
    }
}
