//! Main rendering logic for the TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::store::{Store, Tab};

use super::list_view::LocationTable;
use super::widgets::{render_header, render_map_panel};

/// Main render function: header bar plus the active tab's content.
pub fn render(frame: &mut Frame, store: &Store, table: &LocationTable, paused: bool) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(3),    // Content area
    ])
    .split(area);

    let active_tab = {
        let state = store.state();
        render_header(frame, chunks[0], &state, paused);
        state.active_tab
    };

    match active_tab {
        Tab::List => table.render(frame, chunks[1]),
        Tab::Map => render_map_panel(frame, chunks[1], &store.state()),
    }
}
