//! Overlay drawn above the capture surface while a capture is active

use crate::domain::Orientation;

/// Visual state of the capture overlay.
///
/// Purely presentational: it never receives input and is driven by the
/// capture session lifecycle.
#[derive(Debug, Default, Clone)]
pub struct CaptureOverlayController {
    visible: bool,
    /// Rotation applied to the overlay content, in clockwise degrees
    rotation: u16,
}

impl CaptureOverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the overlay. Returns `true` if it was hidden before.
    pub fn show(&mut self) -> bool {
        let changed = !self.visible;
        if changed {
            log::debug!("Capture overlay: show");
        }
        self.visible = true;
        changed
    }

    /// Hide the overlay. Returns `true` if it was visible before.
    pub fn hide(&mut self) -> bool {
        let changed = self.visible;
        if changed {
            log::debug!("Capture overlay: hide");
        }
        self.visible = false;
        changed
    }

    pub fn rotation_degrees(&self) -> u16 {
        self.rotation
    }

    /// Track a new device orientation.
    ///
    /// Returns the new rotation when it changed. Flat or unknown readings
    /// keep the last upright orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Option<u16> {
        let rotation = orientation.rotation_degrees()?;
        if rotation == self.rotation {
            return None;
        }
        self.rotation = rotation;
        Some(rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_hide_idempotent() {
        let mut overlay = CaptureOverlayController::new();
        assert!(!overlay.is_visible());
        assert!(overlay.show());
        assert!(!overlay.show());
        assert!(overlay.is_visible());
        assert!(overlay.hide());
        assert!(!overlay.hide());
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_orientation_rotation() {
        let mut overlay = CaptureOverlayController::new();
        assert_eq!(overlay.set_orientation(Orientation::LandscapeLeft), Some(90));
        assert_eq!(overlay.set_orientation(Orientation::LandscapeLeft), None);
        assert_eq!(overlay.set_orientation(Orientation::FaceUp), None);
        assert_eq!(overlay.rotation_degrees(), 90);
        assert_eq!(overlay.set_orientation(Orientation::Portrait), Some(0));
    }

    #[test]
    fn test_orientation_independent_of_visibility() {
        let mut overlay = CaptureOverlayController::new();
        overlay.set_orientation(Orientation::LandscapeRight);
        overlay.show();
        overlay.hide();
        assert_eq!(overlay.rotation_degrees(), 270);
    }
}
