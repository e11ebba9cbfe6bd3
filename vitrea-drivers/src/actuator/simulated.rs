//! Simulated cleaning head
//!
//! Reports success for every action except those scripted to fault.
//! The script is consumed one entry per action; once it runs out every
//! action succeeds.

use heapless::Vec;
use vitrea_core::model::{WindowId, WindowTarget};
use vitrea_core::traits::{ActuatorReport, CleaningActuator};

/// Longest fault script
pub const MAX_SCRIPT: usize = 32;

/// Simulated cleaning actuator
#[derive(Debug, Clone, Default)]
pub struct SimulatedActuator {
    /// `true` entries fault
    script: Vec<bool, MAX_SCRIPT>,
    cursor: usize,
    actions: u32,
    faults: u32,
    last_window: Option<WindowId>,
}

impl SimulatedActuator {
    /// Actuator that always succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Actuator following a fault script (truncated to `MAX_SCRIPT`)
    pub fn with_script(script: &[bool]) -> Self {
        let mut actuator = Self::default();
        for &fault in script.iter().take(MAX_SCRIPT) {
            let _ = actuator.script.push(fault);
        }
        actuator
    }

    /// Actuator whose first `count` actions fault
    pub fn failing(count: usize) -> Self {
        let mut actuator = Self::default();
        for _ in 0..count.min(MAX_SCRIPT) {
            let _ = actuator.script.push(true);
        }
        actuator
    }

    /// Total actions attempted
    pub fn actions(&self) -> u32 {
        self.actions
    }

    /// Actions that faulted
    pub fn faults(&self) -> u32 {
        self.faults
    }

    pub fn last_window(&self) -> Option<WindowId> {
        self.last_window
    }
}

impl CleaningActuator for SimulatedActuator {
    fn apply_cleaning_action(&mut self, window: &WindowTarget) -> ActuatorReport {
        self.actions += 1;
        self.last_window = Some(window.id());

        let fault = self.script.get(self.cursor).copied().unwrap_or(false);
        self.cursor += 1;
        if fault {
            self.faults += 1;
            ActuatorReport::Fault
        } else {
            ActuatorReport::Success
        }
    }
}
