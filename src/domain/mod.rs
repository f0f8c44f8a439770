//! Pure domain types with minimal dependencies
//!
//! This module contains core types used throughout the application.
//! Types here should have no runtime dependencies (tokio, futures, etc.)
//! so the presentation state machine stays framework-agnostic.

pub mod artifact;
pub mod error;
pub mod presentation;
pub mod selection;

pub use artifact::*;
pub use error::*;
pub use presentation::*;
pub use selection::*;
