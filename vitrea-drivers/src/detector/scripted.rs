//! Scripted window detector
//!
//! Replays a fixed set of detections through the facade scanner on every
//! scan. Used for bench runs and mission tests.

use heapless::Vec;
use vitrea_core::model::{WindowTarget, MAX_WINDOWS};
use vitrea_core::traits::WindowDetector;

use super::scanner::{Detection, FacadeScanner};

/// Detector that reports the same facade every scan
#[derive(Debug, Clone, Default)]
pub struct ScriptedDetector {
    scanner: FacadeScanner,
    detections: Vec<Detection, MAX_WINDOWS>,
    scans: u32,
}

impl ScriptedDetector {
    /// Create a detector reporting `detections`
    ///
    /// Detections beyond `MAX_WINDOWS` are ignored.
    pub fn new(scanner: FacadeScanner, detections: &[Detection]) -> Self {
        let mut script = Vec::new();
        for d in detections.iter().take(MAX_WINDOWS) {
            let _ = script.push(*d);
        }
        Self {
            scanner,
            detections: script,
            scans: 0,
        }
    }

    /// Replace the scripted facade
    pub fn set_detections(&mut self, detections: &[Detection]) {
        self.detections.clear();
        for d in detections.iter().take(MAX_WINDOWS) {
            let _ = self.detections.push(*d);
        }
    }

    /// Number of scans performed
    pub fn scans(&self) -> u32 {
        self.scans
    }
}

impl WindowDetector for ScriptedDetector {
    fn scan_facade(&mut self) -> Vec<WindowTarget, MAX_WINDOWS> {
        self.scans += 1;
        self.scanner.process(&self.detections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrea_core::model::WindowId;

    #[test]
    fn test_every_scan_reports_same_facade() {
        let mut detector = ScriptedDetector::new(
            FacadeScanner::default(),
            &[
                Detection::rectangle(0.0, 2.0, 1.0, 1.0),
                Detection::rectangle(3.0, 2.0, 1.0, 1.0),
            ],
        );

        let first = detector.scan_facade();
        let second = detector.scan_facade();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(detector.scans(), 2);
    }

    #[test]
    fn test_empty_facade() {
        let mut detector = ScriptedDetector::default();
        assert!(detector.scan_facade().is_empty());
    }

    #[test]
    fn test_set_detections_replaces_script() {
        let mut detector =
            ScriptedDetector::new(FacadeScanner::default(), &[Detection::rectangle(0.0, 2.0, 1.0, 1.0)]);
        detector.set_detections(&[
            Detection::rectangle(5.0, 2.0, 1.0, 1.0),
            Detection::rectangle(8.0, 2.0, 1.0, 1.0),
        ]);

        let windows = detector.scan_facade();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[1].id(), WindowId(2));
    }
}
