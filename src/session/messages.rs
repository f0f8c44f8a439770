//! Message types for the main screen
//!
//! This module contains the Msg enum with nested sub-enums, one per
//! surface the main screen coordinates.

use crate::domain::{CaptureOutcome, Orientation, SessionId, SubmitFailure, SubmitReceipt};

// ============================================================================
// Settings Panel Types
// ============================================================================

/// Settings panel messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsMsg {
    /// Slide the panel in or out
    TogglePanel,
    /// Open the panel (no-op when open)
    OpenPanel,
    /// Close the panel (no-op when closed)
    ClosePanel,
    /// Row tapped in the option list
    SelectRow(usize),
}

// ============================================================================
// Capture Types
// ============================================================================

/// Capture workflow messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureMsg {
    /// Camera button pressed
    Start,
    /// Abort the active capture
    Cancel,
    /// Capture device finished a session
    Finished(SessionId, CaptureOutcome),
    /// Upload collaborator finished with an artifact
    Submitted(Result<SubmitReceipt, SubmitFailure>),
}

// ============================================================================
// Screen Lifecycle Types
// ============================================================================

/// Screen lifecycle and device messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenMsg {
    /// Screen became visible
    Shown,
    /// Device was rotated
    OrientationChanged(Orientation),
}

// ============================================================================
// Main Message Enum
// ============================================================================

/// Messages handled by the main screen controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Settings(SettingsMsg),
    Capture(CaptureMsg),
    Screen(ScreenMsg),
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl Msg {
    // Settings shortcuts
    pub fn toggle_settings_panel() -> Self {
        Self::Settings(SettingsMsg::TogglePanel)
    }
    pub fn open_settings_panel() -> Self {
        Self::Settings(SettingsMsg::OpenPanel)
    }
    pub fn close_settings_panel() -> Self {
        Self::Settings(SettingsMsg::ClosePanel)
    }
    pub fn select_row(row: usize) -> Self {
        Self::Settings(SettingsMsg::SelectRow(row))
    }

    // Capture shortcuts
    pub fn start_capture() -> Self {
        Self::Capture(CaptureMsg::Start)
    }
    pub fn cancel_capture() -> Self {
        Self::Capture(CaptureMsg::Cancel)
    }
    pub fn capture_finished(session: SessionId, outcome: CaptureOutcome) -> Self {
        Self::Capture(CaptureMsg::Finished(session, outcome))
    }
    pub fn submitted(result: Result<SubmitReceipt, SubmitFailure>) -> Self {
        Self::Capture(CaptureMsg::Submitted(result))
    }

    // Screen shortcuts
    pub fn screen_shown() -> Self {
        Self::Screen(ScreenMsg::Shown)
    }
    pub fn orientation_changed(orientation: Orientation) -> Self {
        Self::Screen(ScreenMsg::OrientationChanged(orientation))
    }
}
