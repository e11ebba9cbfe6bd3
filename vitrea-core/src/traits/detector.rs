//! Window detector trait
//!
//! The vision subsystem is consumed only through its list of detected
//! windows.

use heapless::Vec;

use crate::model::{WindowTarget, MAX_WINDOWS};

/// Source of window targets
pub trait WindowDetector {
    /// Scan the facade and return the detected windows
    ///
    /// Window ids must be unique within one scan. An empty result means
    /// no windows were found.
    fn scan_facade(&mut self) -> Vec<WindowTarget, MAX_WINDOWS>;
}
