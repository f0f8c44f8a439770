//! Core application module
//!
//! This module contains:
//! - The main screen coordinator (screen.rs)
//! - The event loop driving it (app.rs)
//! - Collaborator seams and the folder save pipeline
//! - The stdin control interface

pub mod app;
pub mod collaborators;
pub mod control;
pub mod save;
pub mod screen;
pub mod task;
