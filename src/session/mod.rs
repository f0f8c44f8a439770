//! Screen session module
//!
//! This module contains:
//! - Message types routed into the main screen controller
//! - Presentation snapshot and the screen events drained by the view layer

pub mod messages;
pub mod state;
