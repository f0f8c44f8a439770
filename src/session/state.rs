use std::fmt;

use crate::domain::{
    CaptureSessionState, DeviceUnavailable, PanelVisibility, RowChange, SelectionState,
    SubmitFailure, SubmitReceipt,
};

/// Dismissible notices shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    DeviceUnavailable(DeviceUnavailable),
    CaptureFailed(String),
    SubmitFailed(SubmitFailure),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::DeviceUnavailable(err) => write!(f, "{}", err),
            Notice::CaptureFailed(reason) => write!(f, "capture failed: {}", reason),
            Notice::SubmitFailed(err) => write!(f, "{}", err),
        }
    }
}

/// Presentation changes, in the order they happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    PanelOpened,
    PanelClosed,
    /// Repaint exactly these rows of the settings list
    RowsChanged(RowChange),
    OverlayShown,
    OverlayHidden,
    /// Overlay content rotated to this many clockwise degrees
    OverlayRotated(u16),
    Notice(Notice),
    Submitted(SubmitReceipt),
}

/// Everything a view needs to draw the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationSnapshot {
    pub panel: PanelVisibility,
    pub capture: CaptureSessionState,
    pub overlay_visible: bool,
    pub selection: SelectionState,
}

impl PresentationSnapshot {
    /// Panel open and capture active never coexist
    pub fn is_consistent(&self) -> bool {
        let exclusive = !(self.panel.is_open() && self.capture == CaptureSessionState::Active);
        let overlay_tracks = self.overlay_visible == (self.capture == CaptureSessionState::Active);
        exclusive && overlay_tracks
    }
}

impl fmt::Display for PresentationSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |r: Option<usize>| r.map_or_else(|| "none".to_string(), |r| r.to_string());
        write!(
            f,
            "panel={:?} capture={:?} overlay={} selection=(prev:{}, cur:{})",
            self.panel,
            self.capture,
            if self.overlay_visible { "shown" } else { "hidden" },
            row(self.selection.previous_row()),
            row(self.selection.current_row()),
        )
    }
}
