//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Busy** (a fetch is running): draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events, terminal resize
//!   or quote updates from the fetch task.
//!
//! ## Background Fetches
//!
//! `Effect::SpawnFetch` starts a tokio task that runs the `QuoteFetcher`
//! against a `ChannelSurface`. Its writes come back over an mpsc channel as
//! `Action::QuoteUpdate` and are applied between frames, so the page model
//! is only ever touched from the event loop.

mod component;
mod components;
mod event;
mod surface;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::quote::{HttpQuoteSource, QuoteFetcher};
use crate::tui::component::EventHandler;
use crate::tui::components::nav_bar::hit_test;
use crate::tui::components::{NavBarState, NavEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::surface::ChannelSurface;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub nav: NavBarState,
    pub hub_scroll: ScrollViewState,
    /// Section the hub should scroll to on the next frame.
    pub pending_scroll: Option<String>,
}

impl TuiState {
    pub fn new(link_count: usize) -> Self {
        Self {
            nav: NavBarState::new(link_count),
            hub_scroll: ScrollViewState::default(),
            pending_scroll: None,
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

/// Build the quote fetcher from a resolved config's endpoint and retry policy.
pub fn build_fetcher(config: &ResolvedConfig) -> QuoteFetcher {
    let source = HttpQuoteSource::new(config.quote_url.clone(), config.fields.clone());
    QuoteFetcher::new(Arc::new(source), config.retry)
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let fetcher = build_fetcher(&config);
    let mut app = App::new(&config);
    let mut tui = TuiState::new(app.router.links().len());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Abort handle for the running fetch, if any
    let mut active_fetch: Option<tokio::task::AbortHandle> = None;

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    if update(&mut app, Action::PageReady) == Effect::SpawnFetch {
        active_fetch = Some(spawn_fetch(&fetcher, tx.clone()));
    }

    loop {
        if let Some(section) = app.router.page_mut().take_scroll_request() {
            tui.pending_scroll = Some(section);
        }

        let busy = app.board.state.is_busy() || !app.board.trigger_enabled;
        if busy {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while busy (~12fps), long when idle
        let timeout = if busy {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = route_event(&mut tui, &app, &event) else {
                continue;
            };
            debug!("Dispatching {:?}", action);
            if let Action::ActivateLink(index) = action {
                tui.nav.focus(index);
            }
            match update(&mut app, action) {
                Effect::Quit => should_quit = true,
                Effect::SpawnFetch => {
                    active_fetch = Some(spawn_fetch(&fetcher, tx.clone()));
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (quote updates)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::SpawnFetch {
                active_fetch = Some(spawn_fetch(&fetcher, tx.clone()));
            }
        }
    }

    if let Some(handle) = active_fetch.take() {
        handle.abort();
    }

    ratatui::restore();
    Ok(())
}

/// Translate a terminal event into an action for the current screen.
///
/// Purely presentational events (scrolling, moving tab focus) are applied
/// to `tui` directly and yield `None`.
fn route_event(tui: &mut TuiState, app: &App, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    // The notice is modal: only closing it (or quitting) gets through
    if app.board.notice_visible() {
        return match event {
            TuiEvent::Submit | TuiEvent::Escape => Some(Action::DismissNotice),
            TuiEvent::Quit => Some(Action::Quit),
            _ => None,
        };
    }

    let hub_active = app.router.is_hub_active();
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::MouseClick(col, row) if *row == ui::NAV_ROW => {
            let index = hit_test(app.router.links(), *col)?;
            tui.nav.focus(index);
            Some(Action::ActivateLink(index))
        }
        TuiEvent::ScrollUp if hub_active => {
            tui.hub_scroll.scroll_up();
            None
        }
        TuiEvent::ScrollDown if hub_active => {
            tui.hub_scroll.scroll_down();
            None
        }
        TuiEvent::GoToApp if hub_active => Some(Action::GoToApp),
        TuiEvent::NewQuote if !hub_active => Some(Action::RequestQuote),
        _ => match tui.nav.handle_event(event)? {
            NavEvent::Activate(index) => Some(Action::ActivateLink(index)),
        },
    }
}

fn spawn_fetch(fetcher: &QuoteFetcher, tx: mpsc::Sender<Action>) -> tokio::task::AbortHandle {
    info!("Spawning quote fetch");
    let fetcher = fetcher.clone();
    let handle = tokio::spawn(async move {
        let mut surface = ChannelSurface::new(tx);
        let outcome = fetcher.run(&mut surface).await;
        debug!("Quote fetch finished after {} attempt(s)", outcome.attempts());
    });
    handle.abort_handle()
}
