//! Row selection tracking for the settings list

/// Incremental redraw diff produced by every selection.
///
/// The view repaints exactly `previous` (to clear its highlight) and
/// `current` (to draw it) instead of the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowChange {
    pub previous: Option<usize>,
    pub current: Option<usize>,
}

impl RowChange {
    /// Rows that need repainting, without duplicates
    pub fn dirty_rows(&self) -> impl Iterator<Item = usize> {
        let second = match (self.previous, self.current) {
            (Some(prev), Some(cur)) if prev == cur => None,
            (_, cur) => cur,
        };
        self.previous.into_iter().chain(second)
    }
}

/// Currently and previously selected row of the settings list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    current_row: Option<usize>,
    previous_row: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_row(&self) -> Option<usize> {
        self.current_row
    }

    pub fn previous_row(&self) -> Option<usize> {
        self.previous_row
    }

    /// Select `row`, remembering the prior current row as previous.
    ///
    /// Re-selecting the current row still shifts it into `previous_row`
    /// so the view can redraw it, but leaves `current_row` alone.
    pub fn select(&mut self, row: usize) -> RowChange {
        self.previous_row = self.current_row;
        if self.current_row != Some(row) {
            self.current_row = Some(row);
        }
        RowChange {
            previous: self.previous_row,
            current: self.current_row,
        }
    }

    pub fn reset(&mut self) {
        self.current_row = None;
        self.previous_row = None;
    }

    pub fn is_selected(&self, row: usize) -> bool {
        self.current_row == Some(row)
    }
}
