//! loctop - location tracking dashboard library.
//!
//! This library provides the data-display core behind the `loctop` TUI:
//! - `store` - dashboard state and its reducer
//! - `bus` - synchronous publish/subscribe channels
//! - `tui` - the interactive table and map views

pub mod bus;
pub mod defer;
pub mod memo;
pub mod model;
pub mod store;
pub mod tui;
