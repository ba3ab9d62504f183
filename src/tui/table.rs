//! Windowed list state: scroll offset, cursor, and viewport bookkeeping.
//!
//! Only the rows inside the visible window are ever materialized into
//! widgets; everything here is index arithmetic over the full row count.

use std::ops::Range;

/// Scroll/cursor state for a virtualized list.
#[derive(Debug, Clone, Default)]
pub struct WindowedList {
    scroll_offset: usize,
    cursor: usize,
    viewport_rows: usize,
    row_count: usize,
}

impl WindowedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
    }

    pub fn set_viewport_rows(&mut self, viewport_rows: usize) {
        self.viewport_rows = viewport_rows;
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Indices of the rows currently inside the viewport.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.scroll_offset.min(self.row_count);
        let end = (start + self.viewport_rows).min(self.row_count);
        start..end
    }

    fn max_offset(&self) -> usize {
        self.row_count.saturating_sub(self.viewport_rows.max(1))
    }

    /// Scrolls so that `index` is the first visible row (start alignment),
    /// clamped to the end of the list.
    pub fn scroll_to_row(&mut self, index: usize) {
        if index >= self.row_count {
            return;
        }
        self.scroll_offset = index.min(self.max_offset());
    }

    /// Clamps offset and cursor to the current bounds. Idempotent; safe to
    /// run on every tick after the row count or viewport changed.
    pub fn refresh_layout(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
        self.cursor = self.cursor.min(self.row_count.saturating_sub(1));
        if self.row_count == 0 {
            self.scroll_offset = 0;
            self.cursor = 0;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.follow_cursor();
    }

    pub fn cursor_down(&mut self) {
        let max = self.row_count.saturating_sub(1);
        self.cursor = (self.cursor + 1).min(max);
        self.follow_cursor();
    }

    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.viewport_rows.max(1));
        self.follow_cursor();
    }

    pub fn page_down(&mut self) {
        let max = self.row_count.saturating_sub(1);
        self.cursor = (self.cursor + self.viewport_rows.max(1)).min(max);
        self.follow_cursor();
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
        self.follow_cursor();
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.row_count.saturating_sub(1);
        self.follow_cursor();
    }

    /// Keeps the cursor inside the visible window.
    fn follow_cursor(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.viewport_rows > 0 && self.cursor >= self.scroll_offset + self.viewport_rows {
            self.scroll_offset = self.cursor + 1 - self.viewport_rows;
        }
    }
}
