//! Capture artifacts and the handles used to produce them

use std::fmt;
use std::path::PathBuf;

/// Identifies one started capture session.
///
/// Outcomes are tagged with the session that produced them so late results
/// from a cancelled session can be told apart from the live one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl SessionId {
    pub fn next(self) -> Self {
        SessionId(self.0 + 1)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Token for an acquired capture device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceHandle {
    pub id: u32,
}

/// A captured photo, opaque to the controllers
#[derive(Clone, PartialEq, Eq)]
pub struct CapturedArtifact {
    /// Suggested file name (e.g. "IMG_0001.jpg")
    pub name: String,
    /// Encoded image bytes, never inspected by the core
    pub data: Vec<u8>,
    /// Where the artifact came from, if it was picked from disk
    pub source: Option<PathBuf>,
}

impl CapturedArtifact {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
            source: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl fmt::Debug for CapturedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedArtifact")
            .field("name", &self.name)
            .field("bytes", &self.data.len())
            .field("source", &self.source)
            .finish()
    }
}

/// Result delivered by the capture device once a capture ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Captured(CapturedArtifact),
    /// User backed out of the picker
    Cancelled,
    Failed(String),
}

/// Returned by the upload collaborator for an accepted artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub name: String,
    /// Where the collaborator put the artifact (URL or path)
    pub location: String,
}
