//! External collaborators of the main screen
//!
//! Upload, settings persistence and the login/cross-post hook are opaque
//! services. The core only calls through these traits.

use futures::future::LocalBoxFuture;

use crate::config::SettingOption;
use crate::domain::{CapturedArtifact, SubmitFailure, SubmitReceipt};

/// Upload/save pipeline receiving every completed capture
pub trait Uploader {
    /// Hand off one artifact. Retrying is up to the implementation.
    fn submit(
        &self,
        artifact: CapturedArtifact,
    ) -> LocalBoxFuture<'static, Result<SubmitReceipt, SubmitFailure>>;
}

/// Source of the settings list and sink for the chosen option
pub trait SettingsStore {
    fn options(&self) -> Vec<SettingOption>;

    fn persist_selection(&mut self, option: &SettingOption) -> anyhow::Result<()>;

    /// Whether the user opted into cross-posting submissions
    fn cross_post_enabled(&self) -> bool {
        false
    }
}

/// Identity/login integration invoked after a successful submission
pub trait CrossPostHook {
    fn on_submitted(&self, receipt: &SubmitReceipt);
}

/// Cross-post hook that only records the request in the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCrossPoster;

impl CrossPostHook for LogCrossPoster {
    fn on_submitted(&self, receipt: &SubmitReceipt) {
        log::info!("Cross-post requested for {} ({})", receipt.name, receipt.location);
    }
}
