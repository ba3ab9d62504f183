//! Derivation of display rows from raw dashboard state.
//!
//! The visible set depends on watch mode: watching shows at most the single
//! current live point; otherwise the full history in order. Row derivation
//! is memoized on the identity of its inputs so that an unchanged state
//! yields the same row sequence allocation, letting the renderer skip
//! unchanged frames by pointer comparison.

use std::sync::Arc;

use crate::memo::Memo;
use crate::model::Location;
use crate::store::DashboardState;
use crate::tui::models::LocationRow;

/// Chooses which records are currently eligible for display.
pub fn visible_locations<'a>(
    locations: &'a [Location],
    current: Option<&'a Location>,
    is_watching: bool,
) -> Vec<&'a Location> {
    if is_watching {
        current.into_iter().collect()
    } else {
        locations.iter().collect()
    }
}

/// Memoization key: sequence identity, current-point identity, watch flag.
pub type RowKey = (Arc<Vec<Location>>, Option<Arc<Location>>, bool);

fn row_key_eq(a: &RowKey, b: &RowKey) -> bool {
    let current_eq = match (&a.1, &b.1) {
        (Some(x), Some(y)) => Arc::ptr_eq(x, y),
        (None, None) => true,
        _ => false,
    };
    Arc::ptr_eq(&a.0, &b.0) && current_eq && a.2 == b.2
}

/// Memoized location-to-row derivation.
pub struct RowPipeline {
    memo: Memo<RowKey, Arc<Vec<LocationRow>>>,
}

impl Default for RowPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl RowPipeline {
    pub fn new() -> Self {
        Self {
            memo: Memo::new(row_key_eq),
        }
    }

    /// Returns the display rows for the given state. While none of the
    /// underlying inputs change, every call returns the same `Arc`.
    pub fn rows(&mut self, state: &DashboardState) -> Arc<Vec<LocationRow>> {
        let key = (
            state.locations.clone(),
            state.current_location.clone(),
            state.is_watching,
        );
        self.memo.derive(key, |(locations, current, is_watching)| {
            let source = visible_locations(locations, current.as_deref(), *is_watching);
            Arc::new(source.into_iter().map(LocationRow::from_location).collect())
        })
    }
}
