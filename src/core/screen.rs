//! Main screen coordinator
//!
//! Owns the settings panel and the capture session (which in turn owns the
//! capture overlay) and keeps them mutually exclusive: the panel is never
//! open while a capture is active. Every public operation applies its
//! transition synchronously and reports presentation changes as
//! [`ScreenEvent`]s, in order.

use futures::FutureExt;
use std::collections::VecDeque;

use super::collaborators::{CrossPostHook, SettingsStore, Uploader};
use super::task::Task;
use crate::capture::device::CaptureDevice;
use crate::capture::session::{CaptureSessionController, Completion};
use crate::domain::{
    CaptureError, CaptureOutcome, Orientation, SessionId, SubmitFailure, SubmitReceipt,
};
use crate::session::messages::{CaptureMsg, Msg, ScreenMsg, SettingsMsg};
use crate::session::state::{Notice, PresentationSnapshot, ScreenEvent};
use crate::widget::settings_panel::SettingsPanelController;

pub struct MainScreenController {
    panel: SettingsPanelController,
    capture: CaptureSessionController,
    uploader: Box<dyn Uploader>,
    settings: Box<dyn SettingsStore>,
    cross_poster: Option<Box<dyn CrossPostHook>>,
    events: VecDeque<ScreenEvent>,
}

impl MainScreenController {
    pub fn new(
        device: Box<dyn CaptureDevice>,
        uploader: Box<dyn Uploader>,
        settings: Box<dyn SettingsStore>,
    ) -> Self {
        let panel = SettingsPanelController::new(settings.options());
        log::debug!("Main screen created with {} options", panel.row_count());
        Self {
            panel,
            capture: CaptureSessionController::new(device),
            uploader,
            settings,
            cross_poster: None,
            events: VecDeque::new(),
        }
    }

    /// Attach the identity/login hook used for cross-posting
    pub fn with_cross_poster(mut self, hook: Box<dyn CrossPostHook>) -> Self {
        self.cross_poster = Some(hook);
        self
    }

    pub fn snapshot(&self) -> PresentationSnapshot {
        PresentationSnapshot {
            panel: self.panel.visibility(),
            capture: self.capture.state(),
            overlay_visible: self.capture.overlay().is_visible(),
            selection: self.panel.selection(),
        }
    }

    /// Take every event emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<ScreenEvent> {
        self.events.drain(..).collect()
    }

    // ------------------------------------------------------------------
    // Message dispatch
    // ------------------------------------------------------------------

    pub fn update(&mut self, msg: Msg) -> Task<Msg> {
        match msg {
            Msg::Settings(msg) => {
                match msg {
                    SettingsMsg::TogglePanel => self.toggle_settings_panel(),
                    SettingsMsg::OpenPanel => self.open_settings_panel(),
                    SettingsMsg::ClosePanel => self.close_settings_panel(),
                    SettingsMsg::SelectRow(row) => self.select_row(row),
                }
                Task::none()
            }
            Msg::Capture(msg) => match msg {
                CaptureMsg::Start => self.start_capture().unwrap_or_else(|err| {
                    log::debug!("Capture not started: {}", err);
                    Task::none()
                }),
                CaptureMsg::Cancel => {
                    self.cancel_capture();
                    Task::none()
                }
                CaptureMsg::Finished(session, outcome) => self.on_capture_outcome(session, outcome),
                CaptureMsg::Submitted(result) => {
                    self.on_submit_result(result);
                    Task::none()
                }
            },
            Msg::Screen(msg) => {
                match msg {
                    ScreenMsg::Shown => self.on_screen_shown(),
                    ScreenMsg::OrientationChanged(orientation) => {
                        self.on_orientation_changed(orientation)
                    }
                }
                Task::none()
            }
        }
    }

    // ------------------------------------------------------------------
    // Settings panel
    // ------------------------------------------------------------------

    pub fn toggle_settings_panel(&mut self) {
        if self.panel.is_open() {
            self.close_settings_panel();
        } else {
            self.open_settings_panel();
        }
    }

    /// Open the panel, cancelling an active capture first
    pub fn open_settings_panel(&mut self) {
        self.observe(|screen| {
            if screen.capture.is_active() {
                log::debug!("Opening settings panel: cancelling active capture");
                screen.capture.cancel_capture();
            }
            screen.panel.open();
        });
    }

    pub fn close_settings_panel(&mut self) {
        self.observe(|screen| {
            screen.panel.close();
        });
    }

    /// Select a row and persist the chosen option
    pub fn select_row(&mut self, row: usize) {
        let Some(change) = self.panel.select_row(row) else {
            return;
        };
        self.events.push_back(ScreenEvent::RowsChanged(change));

        if let Some(option) = self.panel.selected_option() {
            if let Err(err) = self.settings.persist_selection(option) {
                log::warn!("Failed to persist selected option {:?}: {:?}", option.id, err);
            }
        }
    }

    // ------------------------------------------------------------------
    // Capture
    // ------------------------------------------------------------------

    /// Start a capture, closing the settings panel first.
    ///
    /// The returned task resolves with the capture outcome. On
    /// `DeviceUnavailable` a notice is queued and the session stays idle.
    pub fn start_capture(&mut self) -> Result<Task<Msg>, CaptureError> {
        let started = self.observe(|screen| {
            if screen.panel.is_open() {
                log::debug!("Starting capture: closing settings panel");
                screen.panel.close();
            }
            screen.capture.start_capture()
        });

        match started {
            Ok(Some(pending)) => {
                let session = pending.session;
                Ok(Task::future(
                    pending
                        .outcome
                        .map(move |outcome| Msg::capture_finished(session, outcome)),
                ))
            }
            Ok(None) => Ok(Task::none()),
            Err(err) => {
                self.events
                    .push_back(ScreenEvent::Notice(Notice::DeviceUnavailable(err.clone())));
                Err(err.into())
            }
        }
    }

    /// Cancel the active capture. A no-op unless a capture is active.
    pub fn cancel_capture(&mut self) {
        self.observe(|screen| {
            screen.capture.cancel_capture();
        });
    }

    /// Apply the outcome of a capture session.
    ///
    /// A taken photo is handed to the uploader and the session returns to
    /// idle right away; the returned task resolves with the upload result.
    pub fn on_capture_outcome(&mut self, session: SessionId, outcome: CaptureOutcome) -> Task<Msg> {
        let completion = self.observe(|screen| screen.capture.on_outcome(session, outcome));

        match completion {
            Completion::Ready(artifact) => {
                match &artifact.source {
                    Some(source) => log::info!(
                        "Handing off {} ({} bytes, from {})",
                        artifact.name,
                        artifact.len(),
                        source.display()
                    ),
                    None => log::info!("Handing off {} ({} bytes)", artifact.name, artifact.len()),
                }
                let submit = self.uploader.submit(artifact);
                self.capture.finish_hand_off();
                Task::future(submit.map(Msg::submitted))
            }
            Completion::Failed(reason) => {
                self.events
                    .push_back(ScreenEvent::Notice(Notice::CaptureFailed(reason)));
                Task::none()
            }
            Completion::Stale | Completion::Discarded | Completion::Cancelled => Task::none(),
        }
    }

    /// Report the upload result. Failures are surfaced, never retried.
    pub fn on_submit_result(&mut self, result: Result<SubmitReceipt, SubmitFailure>) {
        match result {
            Ok(receipt) => {
                log::info!("Submitted {} to {}", receipt.name, receipt.location);
                if self.settings.cross_post_enabled() {
                    if let Some(hook) = &self.cross_poster {
                        hook.on_submitted(&receipt);
                    }
                }
                self.events.push_back(ScreenEvent::Submitted(receipt));
            }
            Err(failure) => {
                log::warn!("{}", failure);
                self.events
                    .push_back(ScreenEvent::Notice(Notice::SubmitFailed(failure)));
            }
        }
    }

    // ------------------------------------------------------------------
    // Screen lifecycle
    // ------------------------------------------------------------------

    /// Screen appeared: start from a clean camera view, keep the selection
    pub fn on_screen_shown(&mut self) {
        log::debug!("Main screen shown");
        self.close_settings_panel();
    }

    pub fn on_orientation_changed(&mut self, orientation: Orientation) {
        if let Some(degrees) = self.capture.set_orientation(orientation) {
            self.events.push_back(ScreenEvent::OverlayRotated(degrees));
        }
    }

    /// Run `f` and queue events for every panel/overlay visibility change
    fn observe<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let panel_was_open = self.panel.is_open();
        let overlay_was_visible = self.capture.overlay().is_visible();

        let result = f(self);

        let panel_open = self.panel.is_open();
        let overlay_visible = self.capture.overlay().is_visible();

        // Hide before show so the two surfaces never appear together
        if overlay_was_visible && !overlay_visible {
            self.events.push_back(ScreenEvent::OverlayHidden);
        }
        if panel_was_open && !panel_open {
            self.events.push_back(ScreenEvent::PanelClosed);
        }
        if !panel_was_open && panel_open {
            self.events.push_back(ScreenEvent::PanelOpened);
        }
        if !overlay_was_visible && overlay_visible {
            self.events.push_back(ScreenEvent::OverlayShown);
        }

        debug_assert!(
            self.snapshot().is_consistent(),
            "inconsistent presentation: {}",
            self.snapshot()
        );
        result
    }
}
