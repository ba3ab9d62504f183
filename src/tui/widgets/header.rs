//! Header bar showing mode, tabs, and counts.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::store::{DashboardState, Tab};
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &DashboardState, paused: bool) {
    let chunks = Layout::horizontal([
        Constraint::Length(10), // Title
        Constraint::Length(10), // Mode
        Constraint::Min(16),    // Tabs
        Constraint::Length(18), // Record count
        Constraint::Length(46), // Selection
    ])
    .split(area);

    let title = Paragraph::new(" loctop ").style(Styles::header());
    frame.render_widget(title, chunks[0]);

    let mode_str = if state.is_watching {
        " WATCH "
    } else if paused {
        " PAUSED "
    } else {
        " HISTORY "
    };
    let mode = Paragraph::new(mode_str).style(Styles::header());
    frame.render_widget(mode, chunks[1]);

    let tabs: Vec<Span> = Tab::all()
        .iter()
        .enumerate()
        .flat_map(|(i, tab)| {
            let style = if *tab == state.active_tab {
                Styles::tab_active()
            } else {
                Styles::tab_inactive()
            };
            let num = format!(" {}:", i + 1);
            let name = format!("{} ", tab.name());
            vec![Span::styled(num, Styles::dim()), Span::styled(name, style)]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(tabs)), chunks[2]);

    let count = Paragraph::new(format!(" {} records ", state.locations.len())).style(Styles::dim());
    frame.render_widget(count, chunks[3]);

    let selection = state
        .selected_location_id
        .as_deref()
        .map(|uuid| format!(" sel: {} ", uuid))
        .unwrap_or_default();
    frame.render_widget(Paragraph::new(selection).style(Styles::dim()), chunks[4]);
}
