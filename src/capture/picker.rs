//! Image picker backed by a folder of photos
//!
//! Each capture hands out the next file of the folder (in name order)
//! once the shutter is pressed through the paired `ShutterRemote`.

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use std::cell::RefCell;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;
use tokio::sync::oneshot;

use super::device::CaptureDevice;
use crate::domain::{CaptureOutcome, CapturedArtifact, DeviceHandle, DeviceUnavailable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickerAction {
    Shoot,
    Dismiss,
}

/// The shutter of the capture currently on screen, if any
type ShutterSlot = Rc<RefCell<Option<oneshot::Sender<PickerAction>>>>;

pub struct FolderPicker {
    dir: PathBuf,
    files: Vec<PathBuf>,
    cursor: usize,
    next_handle: u32,
    shutter: ShutterSlot,
}

/// User-side controls of the picker
#[derive(Clone)]
pub struct ShutterRemote {
    shutter: ShutterSlot,
}

impl FolderPicker {
    pub fn new(dir: impl Into<PathBuf>) -> (Self, ShutterRemote) {
        let shutter = ShutterSlot::default();
        let picker = Self {
            dir: dir.into(),
            files: Vec::new(),
            cursor: 0,
            next_handle: 0,
            shutter: shutter.clone(),
        };
        (picker, ShutterRemote { shutter })
    }

    fn scan(&self) -> Result<Vec<PathBuf>, DeviceUnavailable> {
        let entries = std::fs::read_dir(&self.dir).map_err(|err| match err.kind() {
            ErrorKind::NotFound => DeviceUnavailable::Absent,
            ErrorKind::PermissionDenied => DeviceUnavailable::PermissionDenied,
            _ => DeviceUnavailable::Other(format!("{}: {}", self.dir.display(), err)),
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(DeviceUnavailable::Other(format!(
                "no photos in {}",
                self.dir.display()
            )));
        }
        Ok(files)
    }
}

impl CaptureDevice for FolderPicker {
    fn acquire(&mut self) -> Result<DeviceHandle, DeviceUnavailable> {
        self.files = self.scan()?;
        self.next_handle += 1;
        log::debug!(
            "Picker acquired {} ({} photos)",
            self.dir.display(),
            self.files.len()
        );
        Ok(DeviceHandle {
            id: self.next_handle,
        })
    }

    fn capture(&mut self, handle: DeviceHandle) -> LocalBoxFuture<'static, CaptureOutcome> {
        if self.files.is_empty() {
            let reason = format!("picker for {} was never acquired", self.dir.display());
            return futures::future::ready(CaptureOutcome::Failed(reason)).boxed_local();
        }
        let path = self.files[self.cursor % self.files.len()].clone();
        self.cursor += 1;

        let (tx, rx) = oneshot::channel();
        // A newer capture replaces any shutter still lying around
        *self.shutter.borrow_mut() = Some(tx);

        async move {
            match rx.await {
                Ok(PickerAction::Shoot) => {
                    let read = tokio::fs::read(&path).await;
                    match read {
                        Ok(data) => {
                            let name = path
                                .file_name()
                                .map(|n| n.to_string_lossy().into_owned())
                                .unwrap_or_else(|| format!("capture-{}", handle.id));
                            let mut artifact = CapturedArtifact::new(name, data);
                            artifact.source = Some(path);
                            CaptureOutcome::Captured(artifact)
                        }
                        Err(err) => {
                            CaptureOutcome::Failed(format!("{}: {}", path.display(), err))
                        }
                    }
                }
                Ok(PickerAction::Dismiss) | Err(_) => CaptureOutcome::Cancelled,
            }
        }
        .boxed_local()
    }

    fn dismiss(&mut self, handle: DeviceHandle) {
        log::debug!("Picker dismissed (handle {})", handle.id);
        // Dropping the sender resolves the pending capture as cancelled
        self.shutter.borrow_mut().take();
    }
}

impl ShutterRemote {
    /// Take the photo. Returns `false` when no picker is on screen.
    pub fn press(&self) -> bool {
        self.send(PickerAction::Shoot)
    }

    /// Back out of the picker. Returns `false` when no picker is on screen.
    pub fn dismiss(&self) -> bool {
        self.send(PickerAction::Dismiss)
    }

    fn send(&self, action: PickerAction) -> bool {
        match self.shutter.borrow_mut().take() {
            Some(tx) => tx.send(action).is_ok(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder_with(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, data) in files {
            std::fs::write(dir.path().join(name), data.as_bytes()).unwrap();
        }
        dir
    }

    #[test]
    fn test_missing_folder_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let (mut picker, _) = FolderPicker::new(dir.path().join("nope"));
        assert_eq!(picker.acquire(), Err(DeviceUnavailable::Absent));
    }

    #[test]
    fn test_empty_folder_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let (mut picker, _) = FolderPicker::new(dir.path());
        assert!(matches!(picker.acquire(), Err(DeviceUnavailable::Other(_))));
    }

    #[tokio::test]
    async fn test_shoot_reads_files_in_order() {
        let dir = folder_with(&[("b.jpg", "second"), ("a.jpg", "first")]);
        let (mut picker, remote) = FolderPicker::new(dir.path());

        let handle = picker.acquire().unwrap();
        let pending = picker.capture(handle);
        assert!(remote.press());
        match pending.await {
            CaptureOutcome::Captured(artifact) => {
                assert_eq!(artifact.name, "a.jpg");
                assert_eq!(artifact.data, b"first");
                assert_eq!(artifact.source, Some(dir.path().join("a.jpg")));
            }
            other => panic!("unexpected outcome {:?}", other),
        }

        let handle = picker.acquire().unwrap();
        let pending = picker.capture(handle);
        remote.press();
        match pending.await {
            CaptureOutcome::Captured(artifact) => assert_eq!(artifact.name, "b.jpg"),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_remote_dismiss_cancels() {
        let dir = folder_with(&[("a.jpg", "x")]);
        let (mut picker, remote) = FolderPicker::new(dir.path());
        let handle = picker.acquire().unwrap();
        let pending = picker.capture(handle);
        assert!(remote.dismiss());
        assert_eq!(pending.await, CaptureOutcome::Cancelled);
        assert!(!remote.press());
    }

    #[tokio::test]
    async fn test_device_dismiss_cancels() {
        let dir = folder_with(&[("a.jpg", "x")]);
        let (mut picker, remote) = FolderPicker::new(dir.path());
        let handle = picker.acquire().unwrap();
        let pending = picker.capture(handle);
        picker.dismiss(handle);
        assert_eq!(pending.await, CaptureOutcome::Cancelled);
        assert!(!remote.press());
    }

    #[tokio::test]
    async fn test_file_removed_before_shoot_fails() {
        let dir = folder_with(&[("a.jpg", "x")]);
        let (mut picker, remote) = FolderPicker::new(dir.path());
        let handle = picker.acquire().unwrap();
        let pending = picker.capture(handle);
        std::fs::remove_file(dir.path().join("a.jpg")).unwrap();
        remote.press();
        assert!(matches!(pending.await, CaptureOutcome::Failed(_)));
    }
}
