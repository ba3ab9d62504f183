//! Shared dashboard state and the actions that mutate it.
//!
//! Single-threaded, interior-mutability store: components read the state
//! through [`Store::state`] and mutate it only by dispatching an [`Action`].
//! The location sequence and the current live point are held behind `Arc`s;
//! every mutation replaces the `Arc`, so downstream caches can invalidate
//! by pointer identity alone.

use std::cell::{Ref, RefCell};
use std::sync::Arc;

use tracing::debug;

use crate::model::Location;

/// Screen tabs of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    List,
    Map,
}

impl Tab {
    pub fn all() -> [Tab; 2] {
        [Tab::List, Tab::Map]
    }

    pub fn name(self) -> &'static str {
        match self {
            Tab::List => "LIST",
            Tab::Map => "MAP",
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::List => Tab::Map,
            Tab::Map => Tab::List,
        }
    }

    pub fn prev(self) -> Tab {
        // Two tabs: prev == next.
        self.next()
    }
}

/// Read-only view of everything the dashboard displays.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Full historical sequence, oldest first.
    pub locations: Arc<Vec<Location>>,
    /// Most recent live point, if any.
    pub current_location: Option<Arc<Location>>,
    /// When set, only the current live point is displayed.
    pub is_watching: bool,
    /// uuid of the selected record, if any.
    pub selected_location_id: Option<String>,
    pub active_tab: Tab,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            locations: Arc::new(Vec::new()),
            current_location: None,
            is_watching: false,
            selected_location_id: None,
            active_tab: Tab::List,
        }
    }
}

/// State mutations.
#[derive(Debug, Clone)]
pub enum Action {
    /// Replaces the historical sequence; the newest record becomes the
    /// current live point.
    LoadLocations(Vec<Location>),
    /// Appends a freshly arrived record and makes it the current live point.
    RecordLocation(Location),
    SetWatching(bool),
    SelectLocation(String),
    SwitchTab(Tab),
}

/// Single-threaded state container.
#[derive(Default)]
pub struct Store {
    state: RefCell<DashboardState>,
}

impl Store {
    pub fn new(state: DashboardState) -> Self {
        Self {
            state: RefCell::new(state),
        }
    }

    /// Borrows the current state. Callers must drop the borrow before
    /// dispatching.
    pub fn state(&self) -> Ref<'_, DashboardState> {
        self.state.borrow()
    }

    pub fn dispatch(&self, action: Action) {
        let mut state = self.state.borrow_mut();
        match action {
            Action::LoadLocations(locations) => {
                debug!(count = locations.len(), "loading locations");
                state.current_location = locations.last().cloned().map(Arc::new);
                state.locations = Arc::new(locations);
            }
            Action::RecordLocation(location) => {
                let current = Arc::new(location);
                let mut locations = state.locations.as_ref().clone();
                locations.push(current.as_ref().clone());
                state.locations = Arc::new(locations);
                state.current_location = Some(current);
            }
            Action::SetWatching(is_watching) => {
                state.is_watching = is_watching;
            }
            Action::SelectLocation(uuid) => {
                debug!(%uuid, "location selected");
                state.selected_location_id = Some(uuid);
            }
            Action::SwitchTab(tab) => {
                state.active_tab = tab;
            }
        }
    }
}
