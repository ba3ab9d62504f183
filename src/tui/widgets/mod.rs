//! TUI widgets for the location dashboard.

mod header;
mod map_panel;

pub use header::render_header;
pub use map_panel::{focused_location, render_map_panel};
