//! Coordinates
//!
//! World coordinates are metres with `z` as altitude. Facade coordinates
//! live on the wall plane: `x` runs along the wall, `y` is height.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in world space (metres)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    /// Origin (0, 0, 0)
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point3) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        libm::sqrtf(dx * dx + dy * dy + dz * dz)
    }

    /// Same ground position at a different altitude
    pub const fn with_altitude(&self, z: f32) -> Self {
        Self::new(self.x, self.y, z)
    }

    /// Linear interpolation towards `target` (`t` in 0.0..=1.0)
    pub fn lerp(&self, target: &Point3, t: f32) -> Self {
        Self::new(
            self.x + (target.x - self.x) * t,
            self.y + (target.y - self.y) * t,
            self.z + (target.z - self.z) * t,
        )
    }
}

/// A point on the facade plane (metres)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FacadePoint {
    /// Lateral position along the wall
    pub x: f32,
    /// Height above the facade datum
    pub y: f32,
}

impl FacadePoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// World-space hover point in front of this facade point
    ///
    /// The facade is the plane `y = 0`; the drone hovers `standoff_m`
    /// in front of it.
    pub const fn approach_point(&self, standoff_m: f32) -> Point3 {
        Point3::new(self.x, -standoff_m, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(10.0, -2.0, 4.0);
        assert_eq!(a.lerp(&b, 0.5), Point3::new(5.0, -1.0, 2.0));
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn test_approach_point_maps_height_to_altitude() {
        let p = FacadePoint::new(4.0, 12.5);
        assert_eq!(p.approach_point(0.5), Point3::new(4.0, -0.5, 12.5));
    }
}
