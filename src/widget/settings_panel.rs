//! Slide-in settings panel listing the configurable options

use crate::config::SettingOption;
use crate::domain::{PanelVisibility, RowChange, SelectionState};

/// Owns the option list, its visibility and the row selection
#[derive(Debug, Clone)]
pub struct SettingsPanelController {
    options: Vec<SettingOption>,
    visibility: PanelVisibility,
    selection: SelectionState,
}

impl SettingsPanelController {
    pub fn new(options: Vec<SettingOption>) -> Self {
        Self {
            options,
            visibility: PanelVisibility::Closed,
            selection: SelectionState::new(),
        }
    }

    pub fn options(&self) -> &[SettingOption] {
        &self.options
    }

    pub fn row_count(&self) -> usize {
        self.options.len()
    }

    pub fn visibility(&self) -> PanelVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn selected_option(&self) -> Option<&SettingOption> {
        self.selection
            .current_row()
            .and_then(|row| self.options.get(row))
    }

    /// Whether `row` should be drawn highlighted
    pub fn is_highlighted(&self, row: usize) -> bool {
        self.selection.is_selected(row)
    }

    /// Open the panel. Returns `true` if it was closed before.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        log::debug!("Settings panel: open");
        self.visibility = PanelVisibility::Open;
        true
    }

    /// Close the panel. Returns `true` if it was open before.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        log::debug!("Settings panel: close");
        self.visibility = PanelVisibility::Closed;
        true
    }

    pub fn toggle(&mut self) -> PanelVisibility {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
        self.visibility
    }

    /// Select `row` and return the redraw diff.
    ///
    /// Rows past the end of the option list are refused.
    pub fn select_row(&mut self, row: usize) -> Option<RowChange> {
        if row >= self.options.len() {
            log::warn!(
                "Ignoring selection of row {} (panel has {} rows)",
                row,
                self.options.len()
            );
            return None;
        }
        let change = self.selection.select(row);
        log::debug!(
            "Settings panel: row {:?} -> {:?}",
            change.previous,
            change.current
        );
        Some(change)
    }
}
