//! # App View Component
//!
//! The quote panel: quote body, author line and the "New Quote" trigger.
//! Stateless; every field is a prop copied from the `QuoteBoard`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::board::QuoteBoard;
use crate::quote::FetchState;
use crate::tui::component::Component;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct AppView<'a> {
    pub quote_text: &'a str,
    pub author: &'a str,
    pub trigger_enabled: bool,
    pub state: FetchState,
    pub spinner_frame: usize,
}

impl<'a> AppView<'a> {
    pub fn new(board: &'a QuoteBoard, spinner_frame: usize) -> Self {
        Self {
            quote_text: &board.quote_text,
            author: &board.author,
            trigger_enabled: board.trigger_enabled,
            state: board.state,
            spinner_frame,
        }
    }

    fn trigger_line(&self) -> Line<'static> {
        if self.trigger_enabled {
            Line::from(vec![
                Span::styled("[n] ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    "New Quote",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        } else {
            let frame = SPINNER[self.spinner_frame % SPINNER.len()];
            Line::from(Span::styled(
                format!("{frame} New Quote"),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            ))
        }
    }
}

impl Component for AppView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = match self.state {
            FetchState::Failed => Color::Red,
            FetchState::Loading { .. } | FetchState::Retrying { .. } => Color::Yellow,
            _ => Color::DarkGray,
        };
        let block = Block::bordered()
            .title(" Quote Generator ")
            .border_style(Style::default().fg(border_color))
            .padding(Padding::horizontal(2));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let quote_style = if self.state == FetchState::Failed {
            Style::default().fg(Color::Red)
        } else {
            Style::default().add_modifier(Modifier::ITALIC)
        };
        let quote = Paragraph::new(self.quote_text)
            .style(quote_style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let quote_height = (quote.line_count(inner.width) as u16).max(1);

        let [quote_area, _, author_area, _, trigger_area] = Layout::vertical([
            Constraint::Length(quote_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(inner);

        frame.render_widget(quote, quote_area);
        frame.render_widget(
            Paragraph::new(self.author)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center),
            author_area,
        );
        frame.render_widget(
            Paragraph::new(self.trigger_line()).alignment(Alignment::Center),
            trigger_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::QuoteSurface;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(board: &QuoteBoard) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| AppView::new(board, 0).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_quote_and_author() {
        let mut board = QuoteBoard::default();
        board.set_quote_text("“Stay hungry”");
        board.set_author("— Someone");

        let text = render_text(&board);
        assert!(text.contains("“Stay hungry”"));
        assert!(text.contains("— Someone"));
        assert!(text.contains("[n] New Quote"));
    }

    #[test]
    fn test_disabled_trigger_shows_spinner() {
        let mut board = QuoteBoard::default();
        board.set_trigger_enabled(false);
        board.set_fetch_state(FetchState::Loading { attempt: 0 });

        let text = render_text(&board);
        assert!(text.contains("⠋ New Quote"));
        assert!(!text.contains("[n]"));
    }
}
