//! Presentation controllers for the surfaces of the main screen

pub mod capture_overlay;
pub mod settings_panel;
