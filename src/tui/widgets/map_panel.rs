//! Map tab: textual detail pane for the selected or current location.
//!
//! Map rendering itself lives outside this dashboard core; this pane shows
//! the record behind the marker and lets Enter focus it in the list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Location;
use crate::store::DashboardState;
use crate::tui::models::LocationRow;
use crate::tui::style::Styles;

/// Resolves the record shown on the map tab: the selected record when one
/// exists, the current live point otherwise.
pub fn focused_location<'a>(state: &'a DashboardState) -> Option<&'a Location> {
    if let Some(uuid) = state.selected_location_id.as_deref()
        && let Some(found) = state.locations.iter().find(|l| l.uuid == uuid)
    {
        return Some(found);
    }
    state.current_location.as_deref()
}

/// Renders the map detail pane.
pub fn render_map_panel(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default().borders(Borders::ALL).title(" Map ");

    let Some(location) = focused_location(state) else {
        let empty = Paragraph::new("No location selected").style(Styles::dim());
        frame.render_widget(empty.block(block), area);
        return;
    };

    let row = LocationRow::from_location(location);
    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<14}", label), Styles::dim()),
            Span::raw(value),
        ])
    };

    let lines = vec![
        field("uuid", row.uuid),
        field("device", row.device_id),
        field("coordinate", row.coordinate),
        field("recorded at", row.recorded_at),
        field("speed", row.speed.to_string()),
        field("activity", row.activity),
        field("event", row.event),
        field("battery", row.battery_level),
        Line::default(),
        Line::from(Span::styled("Enter: focus in list", Styles::dim())),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::Tab;

    fn location(uuid: &str) -> Location {
        Location {
            uuid: uuid.to_string(),
            ..Location::default()
        }
    }

    fn state(selected: Option<&str>) -> DashboardState {
        DashboardState {
            locations: Arc::new(vec![location("a"), location("b")]),
            current_location: Some(Arc::new(location("live"))),
            is_watching: false,
            selected_location_id: selected.map(str::to_string),
            active_tab: Tab::Map,
        }
    }

    #[test]
    fn prefers_selected_record() {
        let state = state(Some("b"));
        assert_eq!(focused_location(&state).unwrap().uuid, "b");
    }

    #[test]
    fn falls_back_to_current_point() {
        let state = state(None);
        assert_eq!(focused_location(&state).unwrap().uuid, "live");
    }

    #[test]
    fn stale_selection_falls_back_to_current_point() {
        let state = state(Some("gone"));
        assert_eq!(focused_location(&state).unwrap().uuid, "live");
    }

    #[test]
    fn nothing_to_show() {
        let mut state = state(None);
        state.current_location = None;
        assert!(focused_location(&state).is_none());
    }
}
