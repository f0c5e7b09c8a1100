//! # Notice Overlay
//!
//! Modal box raised when the quote fetcher gives up. Enter or Esc hides it;
//! the box is kept on the board and reused for the next failure.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::board::Notice;
use crate::tui::component::Component;

pub struct NoticeOverlay<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeOverlay<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Component for NoticeOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 40, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(Line::from(format!(" {} ", self.notice.title)).centered())
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .title_bottom(Line::from(" Enter Close ").centered())
            .padding(Padding::uniform(1));

        let message = Paragraph::new(self.notice.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(message, overlay);
    }
}

/// A rectangle of `percent_x` by `percent_y` centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(rect, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn test_renders_title_and_message() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let notice = Notice {
            title: "Connection Error".to_string(),
            message: "Could not fetch a live quote.".to_string(),
            visible: true,
        };

        terminal
            .draw(|f| NoticeOverlay::new(&notice).render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Connection Error"));
        assert!(text.contains("Could not fetch a live quote."));
        assert!(text.contains("Enter Close"));
    }
}
