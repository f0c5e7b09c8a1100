//! # StatusBar Component
//!
//! Bottom line showing the page mode indicator, the current status message
//! and the key hints for the active view.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! StatusBar is purely presentational: it receives all data as props and
//! has no internal state.
//!
//! ```rust,ignore
//! let mut status_bar = StatusBar::new(
//!     Some("app-view".to_string()),
//!     "Retrying in 2.0s (attempt 3/3)".to_string(),
//!     false,
//! );
//! status_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Mode and status**: `"[app-view] Quote updated │ n new quote · q quit"`
//! 2. **No status**: `"[hub-view] │ g open app · q quit"`
//! 3. **No mode yet**: the bracketed indicator is omitted

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct StatusBar {
    /// Active top-level view id, from the page's mode indicator
    pub mode: Option<String>,
    /// Status message (e.g., "Fetching quote (attempt 1/3)...")
    pub status_message: String,
    /// Whether the hub view is the active one (selects the key hints)
    pub hub_active: bool,
}

impl StatusBar {
    pub fn new(mode: Option<String>, status_message: String, hub_active: bool) -> Self {
        Self {
            mode,
            status_message,
            hub_active,
        }
    }

    fn hints(&self) -> &'static str {
        if self.hub_active {
            "1-9/tab switch · g open app · q quit"
        } else {
            "1-9/tab switch · n new quote · q quit"
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        if let Some(mode) = &self.mode {
            spans.push(Span::styled(
                format!("[{mode}] "),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!("{} ", self.status_message)));
        }
        spans.push(Span::styled(
            format!("│ {}", self.hints()),
            Style::default().fg(Color::DarkGray),
        ));

        frame.render_widget(Line::from(spans), area);
    }
}
