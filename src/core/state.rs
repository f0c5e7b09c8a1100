//! # Application State
//!
//! ```text
//! App
//! ├── router: ViewRouter<Page>   // views, nav links, page model
//! ├── board: QuoteBoard          // quote text, author, trigger, notice
//! ├── go_to_app: NavLink         // hub's "open the app" control
//! ├── status_message: String     // status bar text
//! ├── max_attempts: u32          // for "attempt n/m" in the status bar
//! └── fetch_on_start: bool       // fetch once when the page is ready
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::board::QuoteBoard;
use crate::core::config::ResolvedConfig;
use crate::core::page::Page;
use crate::core::router::{NavLink, ViewRouter};

pub struct App {
    pub router: ViewRouter<Page>,
    pub board: QuoteBoard,
    pub go_to_app: NavLink,
    pub status_message: String,
    pub max_attempts: u32,
    pub fetch_on_start: bool,
}

impl App {
    pub fn new(config: &ResolvedConfig) -> Self {
        let page = Page::new(&config.views, config.nav.len(), config.sections.clone());
        let router = ViewRouter::new(
            config.views.clone(),
            config.hub_view.clone(),
            config.nav.clone(),
            page,
        );

        Self {
            router,
            board: QuoteBoard::default(),
            go_to_app: config.go_to_app.clone(),
            status_message: String::from("Welcome to Beacon!"),
            max_attempts: config.retry.attempts(),
            fetch_on_start: config.fetch_on_start,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Beacon!");
        assert!(app.board.trigger_enabled);
        assert_eq!(app.max_attempts, 3);
        // Nothing is visible until the page-ready action runs the router
        assert!(app.router.page().visible_views().is_empty());
    }
}
