//! Window targets produced by the window detector

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::geometry::FacadePoint;

/// Maximum windows tracked per mission
pub const MAX_WINDOWS: usize = 64;

/// Window identifier, unique within one scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowId(pub u16);

/// Window extent on the facade (metres)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

impl WindowSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A single detected window
///
/// Everything but `cleaned` is fixed once the detector produced it;
/// `cleaned` is only ever set by the cleaning executor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowTarget {
    id: WindowId,
    facade_position: FacadePoint,
    size: WindowSize,
    cleaned: bool,
}

impl WindowTarget {
    /// Create an uncleaned window target
    pub const fn new(id: WindowId, facade_position: FacadePoint, size: WindowSize) -> Self {
        Self {
            id,
            facade_position,
            size,
            cleaned: false,
        }
    }

    pub const fn id(&self) -> WindowId {
        self.id
    }

    /// Window center on the facade plane
    pub const fn facade_position(&self) -> FacadePoint {
        self.facade_position
    }

    pub const fn size(&self) -> WindowSize {
        self.size
    }

    pub const fn is_cleaned(&self) -> bool {
        self.cleaned
    }

    /// Check the target can be flown to and wiped
    ///
    /// Position and size must be finite and the size non-negative.
    pub fn is_well_formed(&self) -> bool {
        let p = self.facade_position;
        let s = self.size;
        p.x.is_finite()
            && p.y.is_finite()
            && s.width.is_finite()
            && s.height.is_finite()
            && s.width >= 0.0
            && s.height >= 0.0
    }

    pub(crate) fn mark_cleaned(&mut self) {
        self.cleaned = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(x: f32, y: f32, width: f32, height: f32) -> WindowTarget {
        WindowTarget::new(WindowId(1), FacadePoint::new(x, y), WindowSize::new(width, height))
    }

    #[test]
    fn test_finite_target_is_well_formed() {
        assert!(target(2.0, 3.0, 1.0, 1.2).is_well_formed());
        assert!(target(0.0, 0.0, 0.0, 0.0).is_well_formed());
    }

    #[test]
    fn test_non_finite_target_rejected() {
        assert!(!target(f32::NAN, 3.0, 1.0, 1.0).is_well_formed());
        assert!(!target(2.0, f32::INFINITY, 1.0, 1.0).is_well_formed());
        assert!(!target(2.0, 3.0, f32::NAN, 1.0).is_well_formed());
        assert!(!target(2.0, 3.0, 1.0, -0.5).is_well_formed());
    }

    #[test]
    fn test_new_target_is_not_cleaned() {
        let mut t = target(0.0, 0.0, 1.0, 1.0);
        assert!(!t.is_cleaned());
        t.mark_cleaned();
        assert!(t.is_cleaned());
    }
}
