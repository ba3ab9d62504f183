//! Terminal user interface for the location dashboard.
//!
//! This module provides an interactive TUI similar to atop/htop for viewing
//! tracked locations as a virtualized table or a map detail pane.

mod app;
mod event;
mod input;
pub mod list_view;
pub mod models;
pub mod pipeline;
mod render;
mod style;
pub mod table;
mod widgets;

pub use app::App;
