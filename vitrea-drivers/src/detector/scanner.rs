//! Facade scanner
//!
//! The vision pipeline reports each window as the four 3-D corners of
//! its frame. The scanner reduces those to facade coordinates:
//! - Center is the mean of the corners
//! - Size is the extent along the facade (x) and altitude (z) axes
//! - Detections whose centers round to the same 0.1 m cell are one window
//! - Ids are assigned in detection order, starting at `first_id`
//!
//! The facade is the `y = 0` plane of the world frame; facade `x` is
//! world `x` and facade `y` is world altitude `z`.

use heapless::Vec;
use vitrea_core::model::{FacadePoint, Point3, WindowId, WindowSize, WindowTarget, MAX_WINDOWS};

/// Smallest frame edge accepted as a window (meters)
const MIN_EDGE_M: f32 = 0.05;

/// Rounding cell for de-duplication (cells per meter)
const DEDUPE_CELLS_PER_M: f32 = 10.0;

/// Raw window detection: frame corners in the world frame
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Detection {
    pub corners: [Point3; 4],
}

impl Detection {
    pub const fn new(corners: [Point3; 4]) -> Self {
        Self { corners }
    }

    /// Axis-aligned frame on the facade plane
    ///
    /// `(x, z)` is the lower-left corner.
    pub const fn rectangle(x: f32, z: f32, width: f32, height: f32) -> Self {
        Self::new([
            Point3::new(x, 0.0, z),
            Point3::new(x + width, 0.0, z),
            Point3::new(x + width, 0.0, z + height),
            Point3::new(x, 0.0, z + height),
        ])
    }

    /// Mean of the four corners
    pub fn center(&self) -> Point3 {
        let mut sum = Point3::ORIGIN;
        for c in &self.corners {
            sum.x += c.x;
            sum.y += c.y;
            sum.z += c.z;
        }
        Point3::new(sum.x / 4.0, sum.y / 4.0, sum.z / 4.0)
    }

    /// Frame extent along the facade and in altitude
    pub fn size(&self) -> WindowSize {
        let (mut min_x, mut max_x) = (f32::INFINITY, f32::NEG_INFINITY);
        let (mut min_z, mut max_z) = (f32::INFINITY, f32::NEG_INFINITY);
        for c in &self.corners {
            min_x = min_x.min(c.x);
            max_x = max_x.max(c.x);
            min_z = min_z.min(c.z);
            max_z = max_z.max(c.z);
        }
        WindowSize::new(max_x - min_x, max_z - min_z)
    }

    fn is_valid(&self) -> bool {
        let size = self.size();
        self.corners
            .iter()
            .all(|c| c.x.is_finite() && c.y.is_finite() && c.z.is_finite())
            && size.width >= MIN_EDGE_M
            && size.height >= MIN_EDGE_M
    }

    /// De-duplication cell of the center
    fn cell(&self) -> (i32, i32, i32) {
        let c = self.center();
        let round = |v: f32| libm::roundf(v * DEDUPE_CELLS_PER_M) as i32;
        (round(c.x), round(c.y), round(c.z))
    }
}

/// Converts detections into window targets
#[derive(Debug, Clone, Copy)]
pub struct FacadeScanner {
    first_id: u16,
}

impl Default for FacadeScanner {
    fn default() -> Self {
        Self::new(1)
    }
}

impl FacadeScanner {
    pub fn new(first_id: u16) -> Self {
        Self { first_id }
    }

    /// Reduce a batch of detections to unique window targets
    ///
    /// Degenerate frames (non-finite corners, edges under 5 cm) are
    /// dropped. Output beyond `MAX_WINDOWS` is truncated.
    pub fn process(&self, detections: &[Detection]) -> Vec<WindowTarget, MAX_WINDOWS> {
        let mut seen: Vec<(i32, i32, i32), MAX_WINDOWS> = Vec::new();
        let mut windows = Vec::new();
        let mut next_id = self.first_id;

        for detection in detections.iter().filter(|d| d.is_valid()) {
            let cell = detection.cell();
            if seen.contains(&cell) {
                continue;
            }

            let center = detection.center();
            let window = WindowTarget::new(
                WindowId(next_id),
                FacadePoint::new(center.x, center.z),
                detection.size(),
            );
            if windows.push(window).is_err() || seen.push(cell).is_err() {
                break;
            }
            next_id = next_id.wrapping_add(1);
        }

        windows
    }
}
