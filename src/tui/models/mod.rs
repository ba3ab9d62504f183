//! Display-row models and formatting helpers for the location table.

mod formatting;
mod location_row;

pub use location_row::LocationRow;
