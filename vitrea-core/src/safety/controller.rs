//! Safety controller implementation
//!
//! Watches resource reports and the consecutive fault count. Consulted
//! before any other transition logic in every control cycle.

use crate::config::DEFAULT_FAULT_BUDGET;
use crate::resource::{ResourceEvent, ResourceReport};
use crate::state::Mode;

/// Kind of fault fed into the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    /// Cleaning mechanism failure
    Actuator,
    /// Navigation leg not acknowledged in time
    NavigationTimeout,
}

/// Why an override is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OverrideReason {
    /// Battery at or below the critical threshold
    CriticalBattery,
    /// Fluid empty while cleaning
    EmptyFluid,
    /// Consecutive faults reached the budget
    FaultBudgetExhausted,
}

/// Mandated mode change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SafetyOverride {
    /// Mode the mission must move to
    pub target: Mode,
    pub reason: OverrideReason,
}

/// Safety evaluation result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SafetyStatus {
    /// No override
    Clear,
    /// Override active
    Override(SafetyOverride),
}

/// Safety controller
///
/// Its only state is the consecutive fault counter for the current
/// mission.
#[derive(Debug, Clone)]
pub struct SafetyController {
    /// Consecutive faults since the last success
    consecutive_faults: u8,
    /// Faults tolerated before the override fires
    fault_budget: u8,
}

impl Default for SafetyController {
    fn default() -> Self {
        Self::new(DEFAULT_FAULT_BUDGET)
    }
}

impl SafetyController {
    /// Create a safety controller with the given fault budget
    pub fn new(fault_budget: u8) -> Self {
        Self {
            consecutive_faults: 0,
            fault_budget: fault_budget.max(1),
        }
    }

    /// Record an actuator fault or navigation timeout
    pub fn record_fault(&mut self, kind: FaultKind) {
        self.consecutive_faults = self.consecutive_faults.saturating_add(1);
        trace!("fault {} recorded", kind);
    }

    /// Record an acknowledged action, breaking the fault streak
    pub fn record_success(&mut self) {
        self.consecutive_faults = 0;
    }

    /// Clear all fault state (new mission or completed maintenance)
    pub fn reset(&mut self) {
        self.consecutive_faults = 0;
    }

    pub fn consecutive_faults(&self) -> u8 {
        self.consecutive_faults
    }

    /// Check if the fault budget is used up
    pub fn fault_budget_exhausted(&self) -> bool {
        self.consecutive_faults >= self.fault_budget
    }

    /// Evaluate all override conditions
    ///
    /// Repeated faults outrank resource exhaustion: a drone that cannot
    /// navigate or clean reliably lands where it is.
    pub fn evaluate(&self, report: &ResourceReport, mode: Mode) -> SafetyStatus {
        if self.fault_budget_exhausted() {
            return SafetyStatus::Override(SafetyOverride {
                target: Mode::Emergency,
                reason: OverrideReason::FaultBudgetExhausted,
            });
        }

        if report.battery == ResourceEvent::CriticalBattery {
            return SafetyStatus::Override(SafetyOverride {
                target: Mode::Returning,
                reason: OverrideReason::CriticalBattery,
            });
        }

        if report.fluid == ResourceEvent::EmptyFluid && mode == Mode::Cleaning {
            return SafetyStatus::Override(SafetyOverride {
                target: Mode::Returning,
                reason: OverrideReason::EmptyFluid,
            });
        }

        SafetyStatus::Clear
    }

    /// Check if any override condition holds
    pub fn is_override_active(&self, report: &ResourceReport, mode: Mode) -> bool {
        matches!(self.evaluate(report, mode), SafetyStatus::Override(_))
    }
}
