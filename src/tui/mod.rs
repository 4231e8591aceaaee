//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Single-threaded and synchronous. Each pass draws (only if something
//! changed), waits up to 250ms for input, then drains every pending event
//! before the next draw. All state changes for one event happen inside
//! that event's handling; nothing runs in the background.

mod component;
mod components;
mod event;
pub mod markdown;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::ModuleCatalog;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::view::View;
use crate::tui::component::EventHandler;
use crate::tui::components::{CatalogEvent, CatalogListState, DetailEvent, ModuleViewState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub catalog_list: CatalogListState,
    pub module_view: ModuleViewState,
    pub code_theme: String,
    pub show_topics: bool,
}

impl TuiState {
    pub fn new(code_theme: String, show_topics: bool) -> Self {
        Self {
            catalog_list: CatalogListState::new(),
            module_view: ModuleViewState::new(),
            code_theme,
            show_topics,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: &ResolvedConfig, catalog: Arc<ModuleCatalog>) -> std::io::Result<()> {
    let mut app = App::new(catalog);
    let mut tui = TuiState::new(config.code_theme.clone(), config.show_topics);

    let (mode_guard, mut terminal) = enter_terminal(TerminalModeGuard::new, ratatui::init)?;
    let result = event_loop(&mut terminal, &mut app, &mut tui);
    drop(mode_guard);
    ratatui::restore();

    info!(
        "Session ended with {} module(s) completed",
        app.progress.len()
    );
    result
}

/// Enable terminal modes, then take over the screen. A mode failure returns
/// before raw mode and the alternate screen are entered.
fn enter_terminal<G, T>(
    enable_modes: impl FnOnce() -> std::io::Result<G>,
    init: impl FnOnce() -> T,
) -> std::io::Result<(G, T)> {
    let guard = enable_modes()?;
    Ok((guard, init()))
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut next = Some(first_event);
        while let Some(event) = next {
            let frame_area = terminal.get_frame().area();
            if handle_event(app, tui, event, frame_area) == Effect::Quit {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}

/// Route one terminal event to the current screen and apply the resulting
/// core actions.
fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    frame_area: ratatui::layout::Rect,
) -> Effect {
    match event {
        // Resize just needs a redraw (already flagged)
        TuiEvent::Resize => return Effect::None,
        TuiEvent::Quit | TuiEvent::ForceQuit => return update(app, Action::Quit),
        _ => {}
    }

    match app.view {
        View::Overview => {
            let opened = match event {
                TuiEvent::MouseClick(_col, row) => {
                    ui::hit_test_card(row, frame_area, tui).map(|idx| {
                        tui.catalog_list.selected = idx;
                        idx
                    })
                }
                _ => tui
                    .catalog_list
                    .handle_event(&event)
                    .map(|CatalogEvent::Open(idx)| idx),
            };
            let Some(id) = opened.and_then(|idx| app.catalog.id_at(idx)) else {
                return Effect::None;
            };
            debug!("Opening module {}", id);
            tui.module_view.reset();
            update(app, Action::SelectModule(id))
        }
        View::ModuleDetail(id) => match tui.module_view.handle_event(&event) {
            Some(DetailEvent::Back) => {
                // Land back on the card that was open
                if let Some(idx) = app.catalog.position(id) {
                    tui.catalog_list.selected = idx;
                }
                update(app, Action::GoBack)
            }
            Some(DetailEvent::MarkComplete) => update(app, Action::MarkComplete(id)),
            Some(DetailEvent::MarkIncomplete) => update(app, Action::MarkIncomplete(id)),
            None => Effect::None,
        },
    }
}
