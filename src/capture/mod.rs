//! Image capture module
//!
//! This module consolidates:
//! - The capture device seam (device.rs)
//! - The capture session state machine (session.rs)
//! - A folder-backed image picker device (picker.rs)

pub mod device;
pub mod picker;
pub mod session;
