//! # Quote Board
//!
//! The display regions of the quote panel: body text, author line, the
//! trigger control and the notification box. This is the concrete
//! `QuoteSurface` the application renders from.

use crate::quote::{FetchState, QuoteSurface};

/// Modal notification. Created on first use, then only shown and hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteBoard {
    pub quote_text: String,
    pub author: String,
    pub trigger_enabled: bool,
    pub state: FetchState,
    /// None until the first notification is raised.
    pub notice: Option<Notice>,
    /// Number of times a notification has been shown.
    pub notices_shown: usize,
}

impl Default for QuoteBoard {
    fn default() -> Self {
        Self {
            quote_text: String::new(),
            author: String::new(),
            trigger_enabled: true,
            state: FetchState::Idle,
            notice: None,
            notices_shown: 0,
        }
    }
}

impl QuoteBoard {
    pub fn notice_visible(&self) -> bool {
        self.notice.as_ref().is_some_and(|n| n.visible)
    }

    /// Hides the notification. The box itself is kept for reuse.
    pub fn dismiss_notice(&mut self) {
        if let Some(notice) = self.notice.as_mut() {
            notice.visible = false;
        }
    }
}

impl QuoteSurface for QuoteBoard {
    fn set_fetch_state(&mut self, state: FetchState) {
        self.state = state;
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_enabled = enabled;
    }

    fn set_quote_text(&mut self, text: &str) {
        self.quote_text = text.to_string();
    }

    fn set_author(&mut self, author: &str) {
        self.author = author.to_string();
    }

    fn show_notification(&mut self, title: &str, message: &str) {
        let notice = self.notice.get_or_insert_with(|| Notice {
            title: String::new(),
            message: String::new(),
            visible: false,
        });
        notice.title = title.to_string();
        notice.message = message.to_string();
        notice.visible = true;
        self.notices_shown += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_defaults() {
        let board = QuoteBoard::default();
        assert!(board.trigger_enabled);
        assert!(board.quote_text.is_empty());
        assert_eq!(board.state, FetchState::Idle);
        assert!(!board.notice_visible());
    }

    #[test]
    fn test_notice_created_lazily_and_reused() {
        let mut board = QuoteBoard::default();
        assert!(board.notice.is_none());

        board.show_notification("Connection Error", "first");
        assert!(board.notice_visible());

        board.dismiss_notice();
        assert!(!board.notice_visible());
        assert!(board.notice.is_some(), "dismiss hides, never removes");

        board.show_notification("Connection Error", "second");
        let notice = board.notice.as_ref().unwrap();
        assert!(notice.visible);
        assert_eq!(notice.message, "second");
        assert_eq!(board.notices_shown, 2);
    }

    #[test]
    fn test_dismiss_without_notice_is_noop() {
        let mut board = QuoteBoard::default();
        board.dismiss_notice();
        assert!(board.notice.is_none());
    }
}
