//! # Actions
//!
//! Everything that can happen in Beacon becomes an `Action`.
//! User clicks a nav tab? That's `Action::ActivateLink(index)`.
//! The fetcher writes to the quote panel? That's `Action::QuoteUpdate(update)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` for the caller to perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::App;
use crate::quote::{FetchState, SurfaceUpdate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The page is ready: establish the initial view and maybe fetch.
    PageReady,
    /// A nav link was activated.
    ActivateLink(usize),
    /// The hub's "go to app" control was activated.
    GoToApp,
    /// The quote trigger was activated.
    RequestQuote,
    /// A write from a running fetch sequence.
    QuoteUpdate(SurfaceUpdate),
    DismissNotice,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnFetch,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::PageReady => {
            app.router.init();
            if app.fetch_on_start {
                start_fetch(app)
            } else {
                Effect::None
            }
        }
        Action::ActivateLink(index) => {
            app.router.activate_link(index);
            Effect::None
        }
        Action::GoToApp => {
            let view = app.go_to_app.view.clone();
            let section = app.go_to_app.section.clone();
            app.router.switch_view(&view, Some(&section));
            Effect::None
        }
        Action::RequestQuote => start_fetch(app),
        Action::QuoteUpdate(surface_update) => {
            if let SurfaceUpdate::FetchState(state) = &surface_update {
                if let Some(message) = status_for(*state, app.max_attempts) {
                    app.status_message = message;
                }
            }
            surface_update.apply_to(&mut app.board);
            Effect::None
        }
        Action::DismissNotice => {
            app.board.dismiss_notice();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Disables the trigger immediately so a second activation before the
/// fetch task's first write is still ignored.
fn start_fetch(app: &mut App) -> Effect {
    if !app.board.trigger_enabled {
        debug!("Quote trigger is disabled, ignoring request");
        return Effect::None;
    }
    app.board.trigger_enabled = false;
    Effect::SpawnFetch
}

fn status_for(state: FetchState, max_attempts: u32) -> Option<String> {
    match state {
        FetchState::Idle => None,
        FetchState::Loading { attempt } => Some(format!(
            "Fetching quote (attempt {}/{})...",
            attempt + 1,
            max_attempts
        )),
        FetchState::Retrying { attempt, delay } => Some(format!(
            "Retrying in {:.1}s (attempt {}/{})",
            delay.as_secs_f32(),
            attempt + 1,
            max_attempts
        )),
        FetchState::Success => Some("Quote updated".to_string()),
        FetchState::Failed => Some("Quote API unreachable".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::fetcher::{FAILURE_MESSAGE, FAILURE_TITLE};
    use crate::test_support::test_app;
    use std::time::Duration;

    #[test]
    fn test_page_ready_shows_first_link_and_fetches() {
        let mut app = test_app();
        let effect = update(&mut app, Action::PageReady);

        assert_eq!(effect, Effect::SpawnFetch);
        assert_eq!(app.router.page().visible_views(), vec!["hub-view"]);
        assert_eq!(app.router.page().active_links(), vec![0]);
        assert!(!app.board.trigger_enabled);
    }

    #[test]
    fn test_page_ready_without_fetch_on_start() {
        let mut app = test_app();
        app.fetch_on_start = false;
        assert_eq!(update(&mut app, Action::PageReady), Effect::None);
        assert!(app.board.trigger_enabled);
    }

    #[test]
    fn test_request_ignored_while_trigger_disabled() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::RequestQuote), Effect::SpawnFetch);
        assert_eq!(update(&mut app, Action::RequestQuote), Effect::None);

        update(
            &mut app,
            Action::QuoteUpdate(SurfaceUpdate::TriggerEnabled(true)),
        );
        assert_eq!(update(&mut app, Action::RequestQuote), Effect::SpawnFetch);
    }

    #[test]
    fn test_go_to_app_uses_control_data() {
        let mut app = test_app();
        update(&mut app, Action::PageReady);
        update(&mut app, Action::GoToApp);

        assert_eq!(app.router.page().visible_views(), vec!["app-view"]);
        assert_eq!(app.router.page().mode(), Some("app-view"));
        assert_eq!(app.router.active_section(), Some("quote-generator"));
    }

    #[test]
    fn test_activate_missing_link_keeps_current() {
        let mut app = test_app();
        update(&mut app, Action::PageReady);
        update(&mut app, Action::ActivateLink(99));
        assert_eq!(app.router.page().visible_views(), vec!["hub-view"]);
        assert_eq!(app.router.page().active_links(), vec![0]);
    }

    #[test]
    fn test_fetch_states_drive_status_message() {
        let mut app = test_app();
        update(
            &mut app,
            Action::QuoteUpdate(SurfaceUpdate::FetchState(FetchState::Loading { attempt: 0 })),
        );
        assert_eq!(app.status_message, "Fetching quote (attempt 1/3)...");

        update(
            &mut app,
            Action::QuoteUpdate(SurfaceUpdate::FetchState(FetchState::Retrying {
                attempt: 1,
                delay: Duration::from_millis(1000),
            })),
        );
        assert_eq!(app.status_message, "Retrying in 1.0s (attempt 2/3)");
        assert!(app.board.state.is_busy());
    }

    #[test]
    fn test_dismiss_notice() {
        let mut app = test_app();
        update(
            &mut app,
            Action::QuoteUpdate(SurfaceUpdate::Notification {
                title: FAILURE_TITLE.to_string(),
                message: FAILURE_MESSAGE.to_string(),
            }),
        );
        assert!(app.board.notice_visible());

        update(&mut app, Action::DismissNotice);
        assert!(!app.board.notice_visible());
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
