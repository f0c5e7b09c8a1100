//! # Hub View Component
//!
//! Renders the hub's sections top to bottom inside a scroll view, followed
//! by the "go to app" control. A pending scroll request from the router
//! moves the viewport so the requested section starts at the top.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::page::Section;
use crate::core::router::NavLink;
use crate::tui::component::Component;

/// Blank rows between sections.
const SECTION_GAP: u16 = 1;

fn section_paragraph(section: &Section) -> Paragraph<'_> {
    let mut lines = vec![Line::from(Span::styled(
        section.title.as_str(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.extend(section.body.lines().map(Line::raw));
    Paragraph::new(lines).wrap(Wrap { trim: true })
}

/// Top row of each section and the total content height, at `width` columns.
pub fn section_layout(sections: &[Section], width: u16) -> (Vec<u16>, u16) {
    let mut offsets = Vec::with_capacity(sections.len());
    let mut y = 0u16;
    for section in sections {
        offsets.push(y);
        let height = section_paragraph(section).line_count(width) as u16;
        y = y.saturating_add(height).saturating_add(SECTION_GAP);
    }
    (offsets, y)
}

pub struct HubView<'a> {
    sections: &'a [Section],
    go_to_app: &'a NavLink,
    scroll: &'a mut ScrollViewState,
    scroll_to: Option<String>,
}

impl<'a> HubView<'a> {
    pub fn new(
        sections: &'a [Section],
        go_to_app: &'a NavLink,
        scroll: &'a mut ScrollViewState,
        scroll_to: Option<String>,
    ) -> Self {
        Self {
            sections,
            go_to_app,
            scroll,
            scroll_to,
        }
    }
}

impl Component for HubView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // One column is reserved for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let (offsets, sections_height) = section_layout(self.sections, content_width);
        let total_height = sections_height.saturating_add(1);

        if let Some(target) = self.scroll_to.take() {
            if let Some(index) = self.sections.iter().position(|s| s.id == target) {
                self.scroll.set_offset(Position::new(0, offsets[index]));
            }
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (section, &y) in self.sections.iter().zip(&offsets) {
            let paragraph = section_paragraph(section);
            let height = paragraph.line_count(content_width) as u16;
            scroll_view.render_widget(paragraph, Rect::new(0, y, content_width, height));
        }

        let control = Line::from(vec![
            Span::styled("[g] ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} →", self.go_to_app.label),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        scroll_view.render_widget(control, Rect::new(0, sections_height, content_width, 1));

        frame.render_stateful_widget(scroll_view, area, &mut *self.scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("home", "Welcome", "one line"),
            Section::new("about", "About", "first\nsecond\nthird"),
            Section::new("contact", "Contact", "reach us"),
        ]
    }

    #[test]
    fn test_section_layout_stacks_with_gaps() {
        let (offsets, total) = section_layout(&sections(), 40);
        // Welcome: title + 1 line = 2, gap 1 → About at 3
        // About: title + 3 lines = 4, gap 1 → Contact at 8
        assert_eq!(offsets, vec![0, 3, 8]);
        assert_eq!(total, 11);
    }

    #[test]
    fn test_scroll_request_moves_viewport() {
        let backend = TestBackend::new(40, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let sections = sections();
        let go_to_app = NavLink::new("Open the app", "app-view", "quote-generator");
        let mut scroll = ScrollViewState::default();

        terminal
            .draw(|f| {
                HubView::new(&sections, &go_to_app, &mut scroll, Some("contact".to_string()))
                    .render(f, f.area());
            })
            .unwrap();

        assert_eq!(scroll.offset().y, 8);
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Contact"));
        assert!(!text.contains("Welcome"));
    }

    #[test]
    fn test_go_to_app_control_rendered() {
        let backend = TestBackend::new(40, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let sections = sections();
        let go_to_app = NavLink::new("Open the app", "app-view", "quote-generator");
        let mut scroll = ScrollViewState::default();

        terminal
            .draw(|f| {
                HubView::new(&sections, &go_to_app, &mut scroll, None).render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("[g] Open the app"));
    }
}
