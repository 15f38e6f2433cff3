//! Sort sheet feature - the dismissible bottom panel offering rating sorts.

pub mod ui;

use crate::catalog::SortOrder;

/// Actions offered by the sheet, top to bottom.
pub const SORT_OPTIONS: [SortOrder; 2] = [SortOrder::Ascending, SortOrder::Descending];

/// Sort sheet state.
#[derive(Debug, Default)]
pub struct SortSheetState {
    /// Whether the sheet is open.
    pub visible: bool,
    cursor: usize,
}

impl SortSheetState {
    /// Create a closed sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the sheet with the first option highlighted.
    pub fn open(&mut self) {
        self.visible = true;
        self.cursor = 0;
    }

    /// Dismiss the sheet without choosing.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Move the highlight up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the highlight down.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < SORT_OPTIONS.len() {
            self.cursor += 1;
        }
    }

    /// Highlighted option index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Close the sheet and return the highlighted option.
    pub fn choose(&mut self) -> SortOrder {
        self.close();
        SORT_OPTIONS[self.cursor]
    }

    /// Close the sheet and return the option at `index`, if any.
    pub fn choose_index(&mut self, index: usize) -> Option<SortOrder> {
        let order = SORT_OPTIONS.get(index).copied()?;
        self.cursor = index;
        self.close();
        Some(order)
    }
}
