//! Presentation core of the tottepost main screen: camera picker, slide-in
//! settings panel and capture overlay, kept mutually exclusive by one
//! coordinator.

pub mod capture;
pub mod config;
pub mod core;
pub mod domain;
pub mod session;
pub mod widget;

pub use crate::core::screen::MainScreenController;
pub use crate::core::task::Task;
pub use crate::session::messages::Msg;
pub use crate::session::state::{Notice, PresentationSnapshot, ScreenEvent};
