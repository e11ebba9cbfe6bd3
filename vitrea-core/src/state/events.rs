//! Triggers that drive mode transitions

/// Triggers that can cause a mode transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
    // Operator events
    /// Operator started a mission
    StartMission,
    /// Operator aborted the mission
    AbortRequested,

    // Navigation events
    /// Takeoff altitude reached
    ReachedAltitude,
    /// Home hover point reached
    ReachedHome,
    /// Drone is on the ground after a normal landing
    TouchdownConfirmed,
    /// Drone is on the ground after an emergency landing
    LandingComplete,

    // Vision / planning events
    /// Scan produced at least one uncleaned window
    WindowsDetected,
    /// Scan produced nothing to clean
    NoWindowsFound,
    /// Cleaning route built
    RouteReady,
    /// Every route step has been processed
    RouteComplete,

    // Resource events
    /// Battery below the low threshold while cleaning
    LowBattery,
    /// Fluid below the low threshold while cleaning
    LowFluid,
    /// Resource exhaustion mandates a return
    ResourceExhausted,

    // Fault events
    /// Fault budget exhausted or unrecoverable failure
    CriticalFailure,

    // Maintenance events
    /// Battery and fluid both restored to full
    RechargeAndRefillComplete,
}
