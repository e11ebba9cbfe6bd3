//! Navigation and positioning traits

use crate::model::Point3;

/// Outcome of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavAck {
    /// Waypoint reached
    Ack,
    /// Waypoint not reached before the deadline
    Timeout,
}

/// Position readout (GPS / home fix)
pub trait PositionSource {
    /// Current position
    fn current_position(&self) -> Point3;

    /// Launch / landing position
    fn home_position(&self) -> Point3;
}

/// Flight controller interface
///
/// Implementations block until the waypoint is reached or their
/// deadline expires; they must never block indefinitely.
pub trait Navigator: PositionSource {
    /// Fly to `target`
    fn navigate_to(&mut self, target: Point3) -> NavAck;
}
