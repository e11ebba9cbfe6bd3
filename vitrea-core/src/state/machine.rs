//! Mode definition and transition table
//!
//! Every allowed transition is listed in [`Mode::transition`]; anything
//! not listed there is forbidden.

use super::events::Trigger;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flight / mission modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// On the ground, ready for a mission
    Idle,
    /// Climbing to working altitude
    Takeoff,
    /// Scanning the facade for windows
    Scanning,
    /// Building the cleaning route
    Planning,
    /// Working through the cleaning route
    Cleaning,
    /// Flying back to the home hover point
    Returning,
    /// Descending onto the home position
    Landing,
    /// Fault detected; descending in place
    Emergency,
    /// On the ground after an emergency, awaiting service
    Maintenance,
}

impl Mode {
    /// All modes, in declaration order
    pub const ALL: [Mode; 9] = [
        Mode::Idle,
        Mode::Takeoff,
        Mode::Scanning,
        Mode::Planning,
        Mode::Cleaning,
        Mode::Returning,
        Mode::Landing,
        Mode::Emergency,
        Mode::Maintenance,
    ];

    /// Check if the drone is off the ground in this mode
    pub fn is_airborne(&self) -> bool {
        !self.is_grounded()
    }

    /// Check if the drone is on the ground in this mode
    pub fn is_grounded(&self) -> bool {
        matches!(self, Mode::Idle | Mode::Maintenance)
    }

    /// Check if the mission is still doing productive work
    ///
    /// These are the modes a safety override or abort can send home.
    pub fn is_working(&self) -> bool {
        matches!(
            self,
            Mode::Takeoff | Mode::Scanning | Mode::Planning | Mode::Cleaning
        )
    }

    /// Check if the drone is on its way down (normally or not)
    pub fn is_descending(&self) -> bool {
        matches!(self, Mode::Returning | Mode::Landing | Mode::Emergency)
    }

    /// Check if maintenance actions are allowed
    pub fn maintenance_allowed(&self) -> bool {
        self.is_grounded()
    }

    /// Process a trigger and return the next mode
    ///
    /// Returns `None` when the transition is not in the table.
    pub fn transition(self, trigger: Trigger) -> Option<Self> {
        use Mode::*;
        use Trigger::*;

        match (self, trigger) {
            // Fault escalation from anywhere but Emergency itself
            (Emergency, CriticalFailure) => None,
            (_, CriticalFailure) => Some(Emergency),

            // Mission start
            (Idle, StartMission) => Some(Takeoff),

            // Takeoff
            (Takeoff, ReachedAltitude) => Some(Scanning),

            // Scanning
            (Scanning, WindowsDetected) => Some(Planning),
            (Scanning, NoWindowsFound) => Some(Returning),

            // Planning
            (Planning, RouteReady) => Some(Cleaning),

            // Cleaning
            (Cleaning, RouteComplete) => Some(Returning),
            (Cleaning, LowBattery) => Some(Returning),
            (Cleaning, LowFluid) => Some(Returning),

            // Early return from any working mode
            (Takeoff | Scanning | Planning | Cleaning, ResourceExhausted) => Some(Returning),
            (Takeoff | Scanning | Planning | Cleaning, AbortRequested) => Some(Returning),

            // Descent
            (Returning, ReachedHome) => Some(Landing),
            (Landing, TouchdownConfirmed) => Some(Idle),
            (Emergency, LandingComplete) => Some(Maintenance),

            // Service
            (Idle | Maintenance, RechargeAndRefillComplete) => Some(Idle),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_mission_cycle() {
        let flow = [
            (Trigger::StartMission, Mode::Takeoff),
            (Trigger::ReachedAltitude, Mode::Scanning),
            (Trigger::WindowsDetected, Mode::Planning),
            (Trigger::RouteReady, Mode::Cleaning),
            (Trigger::RouteComplete, Mode::Returning),
            (Trigger::ReachedHome, Mode::Landing),
            (Trigger::TouchdownConfirmed, Mode::Idle),
        ];

        let mut mode = Mode::Idle;
        for (trigger, expected) in flow {
            mode = mode.transition(trigger).unwrap();
            assert_eq!(mode, expected);
        }
    }

    #[test]
    fn test_no_windows_skips_planning() {
        assert_eq!(
            Mode::Scanning.transition(Trigger::NoWindowsFound),
            Some(Mode::Returning)
        );
    }

    #[test]
    fn test_critical_failure_from_any_mode_but_emergency() {
        for mode in Mode::ALL {
            let next = mode.transition(Trigger::CriticalFailure);
            if mode == Mode::Emergency {
                assert_eq!(next, None);
            } else {
                assert_eq!(next, Some(Mode::Emergency));
            }
        }
    }

    #[test]
    fn test_low_resources_only_return_from_cleaning() {
        for mode in Mode::ALL {
            for trigger in [Trigger::LowBattery, Trigger::LowFluid] {
                let next = mode.transition(trigger);
                if mode == Mode::Cleaning {
                    assert_eq!(next, Some(Mode::Returning));
                } else {
                    assert_eq!(next, None);
                }
            }
        }
    }

    #[test]
    fn test_abort_only_from_working_modes() {
        for mode in Mode::ALL {
            let next = mode.transition(Trigger::AbortRequested);
            if mode.is_working() {
                assert_eq!(next, Some(Mode::Returning));
            } else {
                assert_eq!(next, None);
            }
        }
    }

    #[test]
    fn test_emergency_exits_only_through_landing() {
        for trigger in [
            Trigger::StartMission,
            Trigger::ReachedHome,
            Trigger::TouchdownConfirmed,
            Trigger::RechargeAndRefillComplete,
            Trigger::AbortRequested,
            Trigger::ResourceExhausted,
        ] {
            assert_eq!(Mode::Emergency.transition(trigger), None);
        }
        assert_eq!(
            Mode::Emergency.transition(Trigger::LandingComplete),
            Some(Mode::Maintenance)
        );
        assert_eq!(
            Mode::Maintenance.transition(Trigger::RechargeAndRefillComplete),
            Some(Mode::Idle)
        );
    }

    #[test]
    fn test_start_only_from_idle() {
        for mode in Mode::ALL {
            let next = mode.transition(Trigger::StartMission);
            if mode == Mode::Idle {
                assert_eq!(next, Some(Mode::Takeoff));
            } else {
                assert_eq!(next, None);
            }
        }
    }

    #[test]
    fn test_mode_classification() {
        assert!(Mode::Idle.is_grounded());
        assert!(Mode::Maintenance.maintenance_allowed());
        assert!(Mode::Cleaning.is_airborne());
        assert!(Mode::Emergency.is_descending());
        assert!(!Mode::Cleaning.is_descending());
        assert!(!Mode::Returning.is_working());
        assert!(!Mode::Takeoff.maintenance_allowed());
    }
}
