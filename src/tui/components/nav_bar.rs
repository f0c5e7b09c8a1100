//! # NavBar Component
//!
//! One-line tab strip for the nav links. Each tab shows its hotkey and
//! label; the tabs for the active section are highlighted and the keyboard
//! focus is underlined.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `NavBarState` (focus) lives in `TuiState`
//! - `NavBar` is created each frame with borrowed props

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::router::NavLink;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const SEPARATOR: &str = "│";

/// Events emitted by the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Activate(usize),
}

/// Keyboard focus across the tabs.
pub struct NavBarState {
    pub focused: usize,
    link_count: usize,
}

impl NavBarState {
    pub fn new(link_count: usize) -> Self {
        Self {
            focused: 0,
            link_count,
        }
    }

    /// Moves focus to `index` without activating it.
    pub fn focus(&mut self, index: usize) {
        if index < self.link_count {
            self.focused = index;
        }
    }
}

impl EventHandler for NavBarState {
    type Event = NavEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<NavEvent> {
        if self.link_count == 0 {
            return None;
        }
        match event {
            TuiEvent::NextLink => {
                self.focused = (self.focused + 1) % self.link_count;
                None
            }
            TuiEvent::PrevLink => {
                self.focused = (self.focused + self.link_count - 1) % self.link_count;
                None
            }
            TuiEvent::SelectLink(index) if *index < self.link_count => {
                self.focused = *index;
                Some(NavEvent::Activate(*index))
            }
            TuiEvent::Submit => Some(NavEvent::Activate(self.focused)),
            _ => None,
        }
    }
}

fn tab_label(index: usize, link: &NavLink) -> String {
    format!(" {} {} ", index + 1, link.label)
}

/// Column ranges `[start, end)` occupied by each tab, relative to the bar.
pub fn tab_ranges(links: &[NavLink]) -> Vec<(u16, u16)> {
    let separator = SEPARATOR.width() as u16;
    let mut x = 0u16;
    links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let width = tab_label(i, link).width() as u16;
            let end = x.saturating_add(width);
            let range = (x, end);
            x = end.saturating_add(separator);
            range
        })
        .collect()
}

/// Which tab, if any, sits at column `col` of the bar.
pub fn hit_test(links: &[NavLink], col: u16) -> Option<usize> {
    tab_ranges(links)
        .iter()
        .position(|&(start, end)| col >= start && col < end)
}

pub struct NavBar<'a> {
    links: &'a [NavLink],
    active: Vec<bool>,
    focused: usize,
}

impl<'a> NavBar<'a> {
    pub fn new(links: &'a [NavLink], active: Vec<bool>, focused: usize) -> Self {
        Self {
            links,
            active,
            focused,
        }
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(self.links.len() * 2);
        for (i, link) in self.links.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
            }
            let mut style = if self.active.get(i).copied().unwrap_or(false) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            if i == self.focused {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            spans.push(Span::styled(tab_label(i, link), style));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
