//! Error taxonomy of the presentation core
//!
//! None of these are fatal: each one resolves to an idle presentation
//! state so the user can retry.

use thiserror::Error;

/// Capture device could not be acquired
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceUnavailable {
    #[error("camera access was denied")]
    PermissionDenied,
    #[error("no capture device is present")]
    Absent,
    #[error("capture device unavailable: {0}")]
    Other(String),
}

/// Post-capture hand-off failed inside the upload collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to submit {name}: {reason}")]
pub struct SubmitFailure {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error(transparent)]
    DeviceUnavailable(#[from] DeviceUnavailable),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            DeviceUnavailable::PermissionDenied.to_string(),
            "camera access was denied"
        );
        let failure = SubmitFailure {
            name: "IMG_0001.jpg".to_string(),
            reason: "disk full".to_string(),
        };
        assert_eq!(failure.to_string(), "failed to submit IMG_0001.jpg: disk full");
        let err: CaptureError = DeviceUnavailable::Absent.into();
        assert_eq!(err.to_string(), "no capture device is present");
    }
}
