//! Cleaning route

use heapless::Vec;

use crate::model::{FacadePoint, WindowId, WindowTarget, MAX_WINDOWS};

/// Ordered window ids for one scan cycle
///
/// Immutable once planned; the orchestrator walks it with its own index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CleaningRoute {
    steps: Vec<WindowId, MAX_WINDOWS>,
}

impl CleaningRoute {
    /// Empty route
    pub const fn empty() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn from_steps(steps: Vec<WindowId, MAX_WINDOWS>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Window id at route position `index`
    pub fn get(&self, index: usize) -> Option<WindowId> {
        self.steps.get(index).copied()
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.steps.contains(&id)
    }

    /// Route order as a slice
    pub fn ids(&self) -> &[WindowId] {
        &self.steps
    }

    /// Total facade travel (m) between consecutive route windows
    ///
    /// Ids not found in `windows` are skipped.
    pub fn travel_m(&self, windows: &[WindowTarget]) -> f32 {
        let mut total = 0.0;
        let mut previous: Option<FacadePoint> = None;
        for id in self.steps.iter() {
            let Some(window) = windows.iter().find(|w| w.id() == *id) else {
                continue;
            };
            let here = window.facade_position();
            if let Some(prev) = previous {
                let dx = here.x - prev.x;
                let dy = here.y - prev.y;
                total += libm::sqrtf(dx * dx + dy * dy);
            }
            previous = Some(here);
        }
        total
    }
}
