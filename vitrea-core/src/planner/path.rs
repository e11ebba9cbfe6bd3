//! Route planner
//!
//! The zigzag strategy groups windows into horizontal rows and sweeps
//! alternate rows in opposite directions, so the drone never flies back
//! across the facade between rows. Ordering is total (ties broken by
//! window id) which makes the route independent of input order.

use core::cmp::Ordering;

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::route::CleaningRoute;
use crate::model::{FacadePoint, WindowId, WindowTarget, MAX_WINDOWS};

/// Route strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Row by row, alternating sweep direction
    #[default]
    Zigzag,
    /// Bottom to top, always left to right
    Sequential,
}

/// Planning failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlanError {
    /// More distinct uncleaned windows than a route can hold
    TooManyWindows { count: usize },
}

/// Planner input entry
#[derive(Debug, Clone, Copy)]
struct Stop {
    id: WindowId,
    at: FacadePoint,
}

/// Path planner
#[derive(Debug, Clone, Copy)]
pub struct PathPlanner {
    /// Height band (m) for windows sharing a row
    row_tolerance_m: f32,
}

impl Default for PathPlanner {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl PathPlanner {
    /// Create a planner with the given row tolerance
    pub fn new(row_tolerance_m: f32) -> Self {
        Self {
            row_tolerance_m: row_tolerance_m.max(0.0),
        }
    }

    /// Build a route over all uncleaned windows
    ///
    /// Cleaned windows and repeated ids are skipped. An empty result is
    /// not an error; it means there is nothing to clean. More than
    /// `MAX_WINDOWS` distinct windows is, since no route may omit one.
    pub fn plan(
        &self,
        windows: &[WindowTarget],
        strategy: Strategy,
    ) -> Result<CleaningRoute, PlanError> {
        let mut stops: Vec<Stop, MAX_WINDOWS> = Vec::new();
        for window in windows.iter().filter(|w| !w.is_cleaned()) {
            if stops.iter().any(|s| s.id == window.id()) {
                continue;
            }
            let stop = Stop {
                id: window.id(),
                at: window.facade_position(),
            };
            if stops.push(stop).is_err() {
                return Err(PlanError::TooManyWindows {
                    count: distinct_uncleaned(windows),
                });
            }
        }

        match strategy {
            Strategy::Zigzag => self.order_zigzag(&mut stops),
            Strategy::Sequential => stops.sort_unstable_by(|a, b| {
                a.at.y
                    .total_cmp(&b.at.y)
                    .then(a.at.x.total_cmp(&b.at.x))
                    .then(a.id.cmp(&b.id))
            }),
        }

        let mut steps = Vec::new();
        for stop in stops.iter() {
            // Capacities match, so this cannot overflow
            let _ = steps.push(stop.id);
        }
        Ok(CleaningRoute::from_steps(steps))
    }

    /// Sort `stops` in place into zigzag order
    fn order_zigzag(&self, stops: &mut [Stop]) {
        stops.sort_unstable_by(|a, b| a.at.y.total_cmp(&b.at.y).then(a.id.cmp(&b.id)));

        let mut row_start = 0;
        let mut row_index = 0usize;
        while row_start < stops.len() {
            let anchor_y = stops[row_start].at.y;
            let row_len = stops[row_start..]
                .iter()
                .take_while(|s| s.at.y - anchor_y <= self.row_tolerance_m)
                .count()
                // A non-finite anchor matches nothing, not even itself
                .max(1);
            let row = &mut stops[row_start..row_start + row_len];

            let left_to_right = row_index % 2 == 0;
            row.sort_unstable_by(|a, b| {
                let by_x = a.at.x.total_cmp(&b.at.x);
                let by_x = if left_to_right { by_x } else { by_x.reverse() };
                match by_x {
                    Ordering::Equal => a.id.cmp(&b.id),
                    other => other,
                }
            });

            row_start += row_len;
            row_index += 1;
        }
    }
}

/// Count uncleaned windows with distinct ids
fn distinct_uncleaned(windows: &[WindowTarget]) -> usize {
    windows
        .iter()
        .enumerate()
        .filter(|(i, w)| {
            !w.is_cleaned()
                && !windows[..*i]
                    .iter()
                    .any(|seen| !seen.is_cleaned() && seen.id() == w.id())
        })
        .count()
}
