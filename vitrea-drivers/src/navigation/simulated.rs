//! Simulated navigator
//!
//! Instantaneous kinematic flight model for bench runs:
//! - Legs are flown at cruise speed; a leg slower than the deadline times out
//! - Targets above the altitude ceiling are never acknowledged
//! - Legs longer than `max_leg_m` are flown as shorter segments
//! - A number of forced timeouts can be scripted to exercise fault handling
//!
//! # Usage
//!
//! ```ignore
//! let mut nav = SimulatedNavigator::new(NavigatorConfig::default(), home)?;
//! nav.force_timeouts(2);
//! assert_eq!(nav.navigate_to(target), NavAck::Timeout);
//! ```

use vitrea_core::config::ConfigError;
use vitrea_core::model::Point3;
use vitrea_core::traits::{NavAck, Navigator, PositionSource};

/// Simulated navigator configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavigatorConfig {
    /// Cruise speed in m/s
    pub cruise_speed_mps: f32,
    /// Longest time a single leg may take (ms)
    pub leg_deadline_ms: u32,
    /// Altitude ceiling in meters
    pub max_altitude_m: f32,
    /// Legs longer than this are split into segments
    pub max_leg_m: f32,
    /// Target segment length when splitting
    pub segment_m: f32,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            cruise_speed_mps: 1.0,
            leg_deadline_ms: 30_000,
            max_altitude_m: 50.0,
            max_leg_m: 10.0,
            segment_m: 5.0,
        }
    }
}

impl NavigatorConfig {
    /// Validate the flight envelope
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            self.cruise_speed_mps,
            self.max_altitude_m,
            self.max_leg_m,
            self.segment_m,
        ];
        if positive.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(ConfigError::InvalidGeometry);
        }
        if self.segment_m > self.max_leg_m {
            return Err(ConfigError::InvalidGeometry);
        }
        Ok(())
    }
}

/// Simulated navigator
pub struct SimulatedNavigator {
    config: NavigatorConfig,
    position: Point3,
    home: Point3,
    /// Remaining scripted timeouts
    forced_timeouts: u8,
    /// Total simulated flight time
    flight_time_ms: u32,
    /// Total distance flown
    distance_m: f32,
    /// Navigation requests received
    requests: u32,
}

impl SimulatedNavigator {
    /// Create a navigator parked at `home`
    ///
    /// Fails with `InvalidGeometry` if the flight envelope is invalid.
    pub fn new(config: NavigatorConfig, home: Point3) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            position: home,
            home,
            forced_timeouts: 0,
            flight_time_ms: 0,
            distance_m: 0.0,
            requests: 0,
        })
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Make the next `count` requests time out without moving
    pub fn force_timeouts(&mut self, count: u8) {
        self.forced_timeouts = count;
    }

    pub fn flight_time_ms(&self) -> u32 {
        self.flight_time_ms
    }

    pub fn distance_flown_m(&self) -> f32 {
        self.distance_m
    }

    pub fn requests(&self) -> u32 {
        self.requests
    }

    /// Fly one straight leg
    fn fly_leg(&mut self, target: Point3) -> NavAck {
        let distance = self.position.distance_to(&target);
        let time_ms = distance / self.config.cruise_speed_mps * 1000.0;
        if time_ms > self.config.leg_deadline_ms as f32 {
            return NavAck::Timeout;
        }

        self.position = target;
        self.distance_m += distance;
        self.flight_time_ms = self.flight_time_ms.saturating_add(time_ms as u32);
        NavAck::Ack
    }
}

impl PositionSource for SimulatedNavigator {
    fn current_position(&self) -> Point3 {
        self.position
    }

    fn home_position(&self) -> Point3 {
        self.home
    }
}

impl Navigator for SimulatedNavigator {
    fn navigate_to(&mut self, target: Point3) -> NavAck {
        self.requests += 1;

        if self.forced_timeouts > 0 {
            self.forced_timeouts -= 1;
            return NavAck::Timeout;
        }

        if target.z > self.config.max_altitude_m {
            return NavAck::Timeout;
        }

        let distance = self.position.distance_to(&target);
        if distance <= self.config.max_leg_m {
            return self.fly_leg(target);
        }

        // A timed-out segment leaves the drone where it got to
        let start = self.position;
        let segments = libm::floorf(distance / self.config.segment_m) as u32 + 1;
        for i in 1..=segments {
            let waypoint = start.lerp(&target, i as f32 / segments as f32);
            if self.fly_leg(waypoint) == NavAck::Timeout {
                return NavAck::Timeout;
            }
        }
        NavAck::Ack
    }
}
