//! The virtualized location table and its scroll/selection controller.
//!
//! The controller owns one piece of state beyond the windowed widget: an
//! optional postponed scroll request. Scroll requests arriving while the
//! list tab is inactive are postponed (newest wins) and delivered on a
//! deferred tick once the tab becomes active again.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Cell, Row, Table};
use tracing::trace;

use crate::bus::{Bus, ChangeTab, ScrollToRow, Subscription};
use crate::defer::DeferQueue;
use crate::store::{Store, Tab};
use crate::tui::models::LocationRow;
use crate::tui::style::Styles;
use crate::tui::table::WindowedList;

/// Callback invoked with the uuid of a clicked row. Selection state itself
/// lives in the store; the table only reports the click.
pub type RowSelect = Rc<dyn Fn(&str)>;

struct TableInner {
    store: Rc<Store>,
    defer: Rc<DeferQueue>,
    rows: Arc<Vec<LocationRow>>,
    window: WindowedList,
    postponed_scroll: Option<String>,
    /// Screen area of the table body on the last render, for click mapping.
    body_area: Option<Rect>,
    on_row_select: RowSelect,
}

impl TableInner {
    fn is_active_tab(&self) -> bool {
        self.store.state().active_tab == Tab::List
    }

    /// First-match uuid lookup; unknown ids are a silent no-op (the row may
    /// simply not be loaded yet).
    fn scroll_to_location(&mut self, location_id: &str) {
        if let Some(index) = self.rows.iter().position(|r| r.uuid == location_id) {
            self.window.scroll_to_row(index);
        }
    }

    fn on_scroll_request(&mut self, request: &ScrollToRow) {
        if !self.is_active_tab() {
            trace!(location_id = %request.location_id, "postponing scroll until tab activates");
            self.postponed_scroll = Some(request.location_id.clone());
            return;
        }
        self.scroll_to_location(&request.location_id);
    }

    /// Runs on a deferred tick after a tab change. Conditions are
    /// re-checked here, not at scheduling time.
    fn deliver_postponed(&mut self) {
        if !self.is_active_tab() {
            return;
        }
        if let Some(location_id) = self.postponed_scroll.take() {
            self.scroll_to_location(&location_id);
        }
    }
}

/// Virtualized table of location rows, wired to the scroll and tab buses.
pub struct LocationTable {
    inner: Rc<RefCell<TableInner>>,
    scroll_bus: Rc<Bus<ScrollToRow>>,
    tab_bus: Rc<Bus<ChangeTab>>,
    scroll_sub: Subscription,
    tab_sub: Subscription,
}

impl LocationTable {
    pub fn new(
        store: Rc<Store>,
        scroll_bus: Rc<Bus<ScrollToRow>>,
        tab_bus: Rc<Bus<ChangeTab>>,
        defer: Rc<DeferQueue>,
        on_row_select: impl Fn(&str) + 'static,
    ) -> Self {
        let inner = Rc::new(RefCell::new(TableInner {
            store,
            defer,
            rows: Arc::new(Vec::new()),
            window: WindowedList::new(),
            postponed_scroll: None,
            body_area: None,
            on_row_select: Rc::new(on_row_select),
        }));

        // Handlers hold weak references so a dropped table is never invoked.
        let weak = Rc::downgrade(&inner);
        let scroll_sub = scroll_bus.subscribe(move |request: &ScrollToRow| {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().on_scroll_request(request);
            }
        });

        let weak = Rc::downgrade(&inner);
        let tab_sub = tab_bus.subscribe(move |_: &ChangeTab| {
            let Some(inner) = weak.upgrade() else { return };
            // Whatever tab was named, what matters is our own condition.
            if !inner.borrow().is_active_tab() {
                return;
            }
            let defer = inner.borrow().defer.clone();
            let weak = weak.clone();
            defer.schedule(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().deliver_postponed();
                }
            });
        });

        Self {
            inner,
            scroll_bus,
            tab_bus,
            scroll_sub,
            tab_sub,
        }
    }

    /// Replaces the displayed row sequence. Cheap when the pipeline returned
    /// the cached instance.
    pub fn set_rows(&self, rows: Arc<Vec<LocationRow>>) {
        let mut inner = self.inner.borrow_mut();
        inner.window.set_row_count(rows.len());
        inner.rows = rows;
    }

    pub fn cursor_up(&self) {
        self.inner.borrow_mut().window.cursor_up();
    }

    pub fn cursor_down(&self) {
        self.inner.borrow_mut().window.cursor_down();
    }

    pub fn page_up(&self) {
        self.inner.borrow_mut().window.page_up();
    }

    pub fn page_down(&self) {
        self.inner.borrow_mut().window.page_down();
    }

    pub fn cursor_home(&self) {
        self.inner.borrow_mut().window.cursor_home();
    }

    pub fn cursor_end(&self) {
        self.inner.borrow_mut().window.cursor_end();
    }

    /// Reports the cursor row as clicked.
    pub fn select_cursor_row(&self) {
        let picked = {
            let inner = self.inner.borrow();
            inner
                .rows
                .get(inner.window.cursor())
                .map(|row| (inner.on_row_select.clone(), row.uuid.clone()))
        };
        if let Some((on_row_select, uuid)) = picked {
            on_row_select(&uuid);
        }
    }

    /// Maps a terminal click position to a row and reports it.
    pub fn click_at(&self, column: u16, row: u16) {
        let picked = {
            let inner = self.inner.borrow();
            let Some(body) = inner.body_area else {
                return;
            };
            if column < body.x
                || column >= body.x + body.width
                || row < body.y
                || row >= body.y + body.height
            {
                return;
            }
            let index = inner.window.scroll_offset() + (row - body.y) as usize;
            inner
                .rows
                .get(index)
                .map(|r| (inner.on_row_select.clone(), r.uuid.clone()))
        };
        if let Some((on_row_select, uuid)) = picked {
            on_row_select(&uuid);
        }
    }

    /// Renders the header row plus the rows inside the visible window, and
    /// schedules the recurring deferred layout correction.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let defer = {
            let mut inner = self.inner.borrow_mut();

            // One line goes to the header row.
            let body_rows = area.height.saturating_sub(1);
            inner.window.set_viewport_rows(body_rows as usize);
            inner.body_area = Some(Rect {
                y: area.y + 1,
                height: body_rows,
                ..area
            });

            let selected = inner.store.state().selected_location_id.clone();
            let cursor = inner.window.cursor();

            let header = Row::new(LocationRow::headers()).style(Styles::table_header());
            let rows: Vec<Row> = inner
                .window
                .visible_range()
                .map(|index| {
                    let row = &inner.rows[index];
                    let row_style = if selected.as_deref() == Some(row.uuid.as_str()) {
                        Styles::selected()
                    } else if index == cursor {
                        Styles::cursor()
                    } else {
                        Styles::default()
                    };
                    let battery_style = Styles::battery(row.battery_is_charging);
                    let mut cells: Vec<Cell> = row.cells().into_iter().map(Cell::from).collect();
                    // Battery is the last column; charging state drives its color.
                    if let Some(battery) = cells.pop() {
                        cells.push(battery.style(battery_style));
                    }
                    Row::new(cells).style(row_style)
                })
                .collect();

            let widths: Vec<Constraint> = LocationRow::widths()
                .iter()
                .map(|w| Constraint::Length(*w))
                .collect();
            let table = Table::new(rows, widths).header(header).column_spacing(1);
            frame.render_widget(table, area);

            inner.defer.clone()
        };

        // Virtualization sizing can be invalidated by mutations outside this
        // widget; re-clamp on the next tick, every render pass.
        let weak = Rc::downgrade(&self.inner);
        defer.schedule(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().window.refresh_layout();
            }
        });
    }

    #[cfg(test)]
    fn postponed(&self) -> Option<String> {
        self.inner.borrow().postponed_scroll.clone()
    }

    #[cfg(test)]
    fn scroll_offset(&self) -> usize {
        self.inner.borrow().window.scroll_offset()
    }

    #[cfg(test)]
    fn set_viewport_rows(&self, rows: usize) {
        self.inner.borrow_mut().window.set_viewport_rows(rows);
    }
}

impl Drop for LocationTable {
    fn drop(&mut self) {
        self.scroll_bus.unsubscribe(self.scroll_sub);
        self.tab_bus.unsubscribe(self.tab_sub);
    }
}
