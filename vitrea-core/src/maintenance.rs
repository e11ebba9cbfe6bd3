//! Maintenance service
//!
//! The only way resource levels go back up. Allowed on the ground only.

use crate::error::MissionError;
use crate::model::DroneState;

/// Ground service actions
#[derive(Debug, Clone, Copy, Default)]
pub struct MaintenanceService;

impl MaintenanceService {
    /// Charge the battery to full
    pub fn recharge(&self, drone: &mut DroneState) -> Result<(), MissionError> {
        Self::require_grounded(drone)?;
        drone.fill_battery();
        Ok(())
    }

    /// Refill the cleaning fluid tank
    pub fn refill(&self, drone: &mut DroneState) -> Result<(), MissionError> {
        Self::require_grounded(drone)?;
        drone.fill_fluid();
        Ok(())
    }

    fn require_grounded(drone: &DroneState) -> Result<(), MissionError> {
        let mode = drone.mode();
        if mode.maintenance_allowed() {
            Ok(())
        } else {
            Err(MissionError::InvalidState { mode })
        }
    }
}
