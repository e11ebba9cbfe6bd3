//! Wipe pattern
//!
//! Passes run horizontally across the window frame, bottom to top,
//! alternating direction so the head never crosses the glass
//! diagonally. Each pass contributes its two end points.

use heapless::Vec;

use crate::model::{FacadePoint, WindowTarget};

/// Most passes flown over a single window
pub const MAX_WIPE_PASSES: usize = 16;

/// Most waypoints in a wipe pattern
pub const MAX_WIPE_POINTS: usize = MAX_WIPE_PASSES * 2;

/// Slack absorbing float error when the last pass lands on the top edge
const EDGE_SLACK: f32 = 1e-4;

/// Waypoints of one window's wipe, in flying order
#[derive(Debug, Clone, PartialEq)]
pub struct WipePattern {
    points: Vec<FacadePoint, MAX_WIPE_POINTS>,
}

impl WipePattern {
    /// Build the pattern for `window` with passes `spacing_m` apart
    ///
    /// Passes start at the bottom edge and stop at or below the top edge.
    /// A tall window that would need more than `MAX_WIPE_PASSES` gets the
    /// maximum number of passes spread evenly from bottom to top.
    pub fn for_window(window: &WindowTarget, spacing_m: f32) -> Self {
        let center = window.facade_position();
        let size = window.size();
        let min_x = center.x - size.width / 2.0;
        let max_x = center.x + size.width / 2.0;
        let min_y = center.y - size.height / 2.0;

        let mut passes = MAX_WIPE_PASSES;
        let mut spacing = spacing_m;
        if spacing_m > 0.0 && size.height >= 0.0 {
            let needed = libm::floorf(size.height / spacing_m + EDGE_SLACK) as usize + 1;
            if needed <= MAX_WIPE_PASSES {
                passes = needed;
            } else {
                spacing = size.height / (MAX_WIPE_PASSES - 1) as f32;
            }
        } else {
            passes = 1;
        }

        let mut points = Vec::new();
        for pass in 0..passes {
            let y = min_y + pass as f32 * spacing;
            let (from, to) = if pass % 2 == 0 {
                (min_x, max_x)
            } else {
                (max_x, min_x)
            };
            // Capacity is two points per pass
            let _ = points.push(FacadePoint::new(from, y));
            let _ = points.push(FacadePoint::new(to, y));
        }
        Self { points }
    }

    pub fn points(&self) -> &[FacadePoint] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{WindowId, WindowSize};

    fn window(x: f32, y: f32, width: f32, height: f32) -> WindowTarget {
        WindowTarget::new(WindowId(1), FacadePoint::new(x, y), WindowSize::new(width, height))
    }

    fn close(a: FacadePoint, x: f32, y: f32) -> bool {
        (a.x - x).abs() < 1e-4 && (a.y - y).abs() < 1e-4
    }

    #[test]
    fn test_passes_alternate_bottom_up() {
        let pattern = WipePattern::for_window(&window(2.0, 3.0, 1.0, 0.6), 0.3);
        assert_eq!(pattern.points().len(), 6);

        let expected = [
            (1.5, 2.7),
            (2.5, 2.7),
            (2.5, 3.0),
            (1.5, 3.0),
            (1.5, 3.3),
            (2.5, 3.3),
        ];
        for (point, (x, y)) in pattern.points().iter().zip(expected) {
            assert!(close(*point, x, y), "{:?} != ({}, {})", point, x, y);
        }
    }

    #[test]
    fn test_pass_count_from_height() {
        // 1.2 m at 0.3 m spacing: passes at 0, 0.3, 0.6, 0.9, 1.2
        let pattern = WipePattern::for_window(&window(0.0, 0.0, 1.0, 1.2), 0.3);
        assert_eq!(pattern.points().len(), 10);

        // Last pass stays below the top edge
        let pattern = WipePattern::for_window(&window(0.0, 0.0, 1.0, 1.0), 0.3);
        assert_eq!(pattern.points().len(), 8);
        assert!(pattern.points().iter().all(|p| p.y <= 0.5));
    }

    #[test]
    fn test_flat_window_gets_single_pass() {
        let pattern = WipePattern::for_window(&window(4.0, 1.0, 2.0, 0.0), 0.3);
        assert_eq!(pattern.points().len(), 2);
        assert!(close(pattern.points()[0], 3.0, 1.0));
        assert!(close(pattern.points()[1], 5.0, 1.0));
    }

    #[test]
    fn test_tall_window_capped_and_spread() {
        let pattern = WipePattern::for_window(&window(0.0, 5.0, 1.0, 10.0), 0.3);
        assert_eq!(pattern.points().len(), MAX_WIPE_POINTS);
        let first = pattern.points()[0];
        let last = pattern.points()[MAX_WIPE_POINTS - 1];
        assert!(close(first, -0.5, 0.0));
        assert!((last.y - 10.0).abs() < 1e-3);
    }
}
