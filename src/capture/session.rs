//! Capture session state machine
//!
//! `Idle -> Active` on start, `Active -> Completing` when the device
//! returns a photo, `Completing -> Idle` once it is handed off or discarded,
//! and `Active -> Idle` on cancellation. The overlay is visible exactly
//! while the session is `Active`.

use futures::future::LocalBoxFuture;

use super::device::CaptureDevice;
use crate::domain::{
    CaptureOutcome, CaptureSessionState, CapturedArtifact, DeviceHandle, DeviceUnavailable,
    Orientation, SessionId,
};
use crate::widget::capture_overlay::CaptureOverlayController;

/// A capture launched on the device, still waiting for its outcome
pub struct PendingCapture {
    pub session: SessionId,
    pub outcome: LocalBoxFuture<'static, CaptureOutcome>,
}

/// What a device outcome did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Outcome belongs to a session that is no longer active
    Stale,
    /// Photo taken; the session is `Completing` until `finish_hand_off`
    Ready(CapturedArtifact),
    /// Photo had no payload and was dropped
    Discarded,
    Cancelled,
    Failed(String),
}

pub struct CaptureSessionController {
    device: Box<dyn CaptureDevice>,
    overlay: CaptureOverlayController,
    state: CaptureSessionState,
    /// Id of the most recently started session
    session: SessionId,
    handle: Option<DeviceHandle>,
}

impl CaptureSessionController {
    pub fn new(device: Box<dyn CaptureDevice>) -> Self {
        Self {
            device,
            overlay: CaptureOverlayController::new(),
            state: CaptureSessionState::Idle,
            session: SessionId::default(),
            handle: None,
        }
    }

    pub fn state(&self) -> CaptureSessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == CaptureSessionState::Active
    }

    pub fn overlay(&self) -> &CaptureOverlayController {
        &self.overlay
    }

    pub fn current_session(&self) -> SessionId {
        self.session
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> Option<u16> {
        self.overlay.set_orientation(orientation)
    }

    /// Acquire the device and launch the picker.
    ///
    /// Returns `Ok(None)` when a session is already running. On
    /// `DeviceUnavailable` the session stays `Idle`.
    pub fn start_capture(&mut self) -> Result<Option<PendingCapture>, DeviceUnavailable> {
        if self.state != CaptureSessionState::Idle {
            log::debug!("Ignoring start_capture while {:?}", self.state);
            return Ok(None);
        }

        let handle = self.device.acquire().inspect_err(|err| {
            log::warn!("Capture device unavailable: {}", err);
        })?;

        self.session = self.session.next();
        self.handle = Some(handle);
        self.state = CaptureSessionState::Active;
        self.overlay.show();
        log::debug!("Capture session {} active", self.session);

        Ok(Some(PendingCapture {
            session: self.session,
            outcome: self.device.capture(handle),
        }))
    }

    /// Abort the active session. Returns `true` if one was aborted.
    ///
    /// A no-op unless the session is `Active`.
    pub fn cancel_capture(&mut self) -> bool {
        if self.state != CaptureSessionState::Active {
            log::debug!("Ignoring cancel_capture while {:?}", self.state);
            return false;
        }
        if let Some(handle) = self.handle.take() {
            self.device.dismiss(handle);
        }
        self.leave_active(CaptureSessionState::Idle);
        log::debug!("Capture session {} cancelled", self.session);
        true
    }

    /// Apply an outcome delivered by the device
    pub fn on_outcome(&mut self, session: SessionId, outcome: CaptureOutcome) -> Completion {
        if session != self.session || self.state != CaptureSessionState::Active {
            log::debug!(
                "Dropping stale outcome for session {} (current {} {:?})",
                session,
                self.session,
                self.state
            );
            return Completion::Stale;
        }
        self.handle = None;

        match outcome {
            CaptureOutcome::Captured(artifact) => {
                self.leave_active(CaptureSessionState::Completing);
                if artifact.is_empty() {
                    log::warn!("Discarding empty capture {:?}", artifact.name);
                    self.finish_hand_off();
                    return Completion::Discarded;
                }
                log::debug!(
                    "Capture session {} completing with {:?}",
                    session,
                    artifact
                );
                Completion::Ready(artifact)
            }
            CaptureOutcome::Cancelled => {
                self.leave_active(CaptureSessionState::Idle);
                log::debug!("Capture session {} cancelled by picker", session);
                Completion::Cancelled
            }
            CaptureOutcome::Failed(reason) => {
                self.leave_active(CaptureSessionState::Idle);
                log::warn!("Capture session {} failed: {}", session, reason);
                Completion::Failed(reason)
            }
        }
    }

    /// Return to `Idle` once the artifact has been handed off
    pub fn finish_hand_off(&mut self) {
        if self.state == CaptureSessionState::Completing {
            self.state = CaptureSessionState::Idle;
            log::debug!("Capture session {} idle", self.session);
        }
    }

    fn leave_active(&mut self, next: CaptureSessionState) {
        self.state = next;
        self.overlay.hide();
    }
}
