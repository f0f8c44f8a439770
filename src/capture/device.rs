//! Capture device seam
//!
//! The controllers never touch camera drivers. They go through this trait,
//! which the platform (or the folder picker in this crate) implements.

use futures::future::LocalBoxFuture;

use crate::domain::{CaptureOutcome, DeviceHandle, DeviceUnavailable};

pub trait CaptureDevice {
    /// Acquire the device for one capture session
    fn acquire(&mut self) -> Result<DeviceHandle, DeviceUnavailable>;

    /// Bring up the picker on an acquired device.
    ///
    /// The returned future resolves once the user takes a photo, backs out,
    /// or the device fails.
    fn capture(&mut self, handle: DeviceHandle) -> LocalBoxFuture<'static, CaptureOutcome>;

    /// Tear down the picker early. The pending capture future should then
    /// resolve promptly, usually with `Cancelled`.
    fn dismiss(&mut self, _handle: DeviceHandle) {}
}
