//! Presentation states owned by the screen controllers

/// Whether the settings panel is slid in
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PanelVisibility {
    #[default]
    Closed,
    Open,
}

impl PanelVisibility {
    pub fn is_open(self) -> bool {
        self == PanelVisibility::Open
    }
}

/// Lifecycle of one capture session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSessionState {
    #[default]
    Idle,
    /// Picker is up and the overlay is shown
    Active,
    /// Artifact received, waiting to be handed off or discarded
    Completing,
}

/// Physical device orientation, as reported by the platform
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    FaceUp,
    FaceDown,
    Unknown,
}

impl Orientation {
    /// Rotation (clockwise degrees) that keeps overlay content upright.
    ///
    /// Returns `None` for readings that carry no interface orientation.
    pub fn rotation_degrees(self) -> Option<u16> {
        match self {
            Orientation::Portrait => Some(0),
            Orientation::LandscapeLeft => Some(90),
            Orientation::PortraitUpsideDown => Some(180),
            Orientation::LandscapeRight => Some(270),
            Orientation::FaceUp | Orientation::FaceDown | Orientation::Unknown => None,
        }
    }

    /// Parse the names accepted by the control surface
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "portrait" => Some(Orientation::Portrait),
            "upside-down" => Some(Orientation::PortraitUpsideDown),
            "landscape-left" => Some(Orientation::LandscapeLeft),
            "landscape-right" => Some(Orientation::LandscapeRight),
            "face-up" => Some(Orientation::FaceUp),
            "face-down" => Some(Orientation::FaceDown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_degrees() {
        assert_eq!(Orientation::Portrait.rotation_degrees(), Some(0));
        assert_eq!(Orientation::LandscapeLeft.rotation_degrees(), Some(90));
        assert_eq!(Orientation::PortraitUpsideDown.rotation_degrees(), Some(180));
        assert_eq!(Orientation::LandscapeRight.rotation_degrees(), Some(270));
        assert_eq!(Orientation::FaceUp.rotation_degrees(), None);
        assert_eq!(Orientation::Unknown.rotation_degrees(), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            Orientation::from_name("landscape-right"),
            Some(Orientation::LandscapeRight)
        );
        assert_eq!(Orientation::from_name("sideways"), None);
    }
}
