//! Main TUI application.

use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::bus::{Bus, ChangeTab, ScrollToRow};
use crate::defer::DeferQueue;
use crate::model::Location;
use crate::store::{Action, DashboardState, Store, Tab};

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::list_view::LocationTable;
use super::pipeline::RowPipeline;
use super::render::render;

/// Main TUI application: owns the store, the buses, the deferred-action
/// queue, and the list table, and drives them from the event loop.
pub struct App {
    store: Rc<Store>,
    scroll_bus: Rc<Bus<ScrollToRow>>,
    tab_bus: Rc<Bus<ChangeTab>>,
    defer: Rc<DeferQueue>,
    pipeline: RowPipeline,
    table: LocationTable,
    /// Records still waiting to be replayed as live points.
    replay: VecDeque<Location>,
    paused: bool,
    should_quit: bool,
}

impl App {
    /// Creates the application root: store, buses, and table wiring.
    ///
    /// With `replay` set, records are fed back one per tick through the
    /// live-point path instead of being loaded up front.
    pub fn new(locations: Vec<Location>, watch: bool, replay: bool) -> Self {
        let store = Rc::new(Store::new(DashboardState::default()));
        let scroll_bus = Rc::new(Bus::new());
        let tab_bus = Rc::new(Bus::new());
        let defer = Rc::new(DeferQueue::new());

        let table = LocationTable::new(
            store.clone(),
            scroll_bus.clone(),
            tab_bus.clone(),
            defer.clone(),
            {
                let store = store.clone();
                move |uuid: &str| store.dispatch(Action::SelectLocation(uuid.to_string()))
            },
        );

        let mut replay_queue = VecDeque::new();
        if replay {
            replay_queue.extend(locations);
        } else {
            store.dispatch(Action::LoadLocations(locations));
        }
        if watch {
            store.dispatch(Action::SetWatching(true));
        }

        Self {
            store,
            scroll_bus,
            tab_bus,
            defer,
            pipeline: RowPipeline::new(),
            table,
            replay: replay_queue,
            paused: false,
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        // Main loop
        loop {
            // Deferred actions run at the top of each turn.
            self.defer.run_pending();

            let rows = {
                let state = self.store.state();
                self.pipeline.rows(&state)
            };
            self.table.set_rows(rows);

            terminal.draw(|frame| render(frame, &self.store, &self.table, self.paused))?;

            match events.next() {
                Ok(Event::Tick) => self.on_tick(),
                Ok(Event::Key(key)) => {
                    let action = handle_key(key);
                    self.apply_key(action);
                }
                Ok(Event::Mouse(mouse)) => self.on_mouse(mouse),
                Ok(Event::Resize) => {}
                Err(_) => self.should_quit = true,
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Feeds the next replayed record through the live-point path.
    fn on_tick(&mut self) {
        if self.paused {
            return;
        }
        if let Some(location) = self.replay.pop_front() {
            self.store.dispatch(Action::RecordLocation(location));
        }
    }

    fn apply_key(&mut self, action: KeyAction) {
        let active_tab = self.store.state().active_tab;
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::NextTab => self.switch_tab(active_tab.next()),
            KeyAction::PrevTab => self.switch_tab(active_tab.prev()),
            KeyAction::GoTab(tab) => self.switch_tab(tab),
            KeyAction::CursorUp => self.table.cursor_up(),
            KeyAction::CursorDown => self.table.cursor_down(),
            KeyAction::PageUp => self.table.page_up(),
            KeyAction::PageDown => self.table.page_down(),
            KeyAction::Home => self.table.cursor_home(),
            KeyAction::End => self.table.cursor_end(),
            KeyAction::Select => self.select(active_tab),
            KeyAction::ToggleWatch => {
                let watching = self.store.state().is_watching;
                self.store.dispatch(Action::SetWatching(!watching));
            }
            KeyAction::TogglePause => self.paused = !self.paused,
            KeyAction::None => {}
        }
    }

    /// Dispatches the tab switch and announces it on the tab bus.
    fn switch_tab(&mut self, tab: Tab) {
        if self.store.state().active_tab == tab {
            return;
        }
        self.store.dispatch(Action::SwitchTab(tab));
        self.tab_bus.publish(&ChangeTab { tab });
    }

    /// Enter on the list acts on the cursor row; Enter on the map focuses
    /// the shown record back in the list (the marker-click path).
    fn select(&mut self, active_tab: Tab) {
        match active_tab {
            Tab::List => self.table.select_cursor_row(),
            Tab::Map => {
                let focused = {
                    let state = self.store.state();
                    super::widgets::focused_location(&state).map(|l| l.uuid.clone())
                };
                if let Some(location_id) = focused {
                    self.store
                        .dispatch(Action::SelectLocation(location_id.clone()));
                    self.scroll_bus.publish(&ScrollToRow { location_id });
                }
            }
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        if self.store.state().active_tab != Tab::List {
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.table.click_at(mouse.column, mouse.row);
            }
            MouseEventKind::ScrollUp => self.table.cursor_up(),
            MouseEventKind::ScrollDown => self.table.cursor_down(),
            _ => {}
        }
    }
}
