use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{AppView, HubView, NavBar, NoticeOverlay, StatusBar};

/// Screen row the nav bar is drawn on, for mouse hit testing.
pub const NAV_ROW: u16 = 0;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [nav_area, main_area, status_area] = layout.areas(frame.area());

    let page = app.router.page();
    let links = app.router.links();
    let active = (0..links.len()).map(|i| page.is_link_active(i)).collect();
    NavBar::new(links, active, tui.nav.focused).render(frame, nav_area);

    // Exactly one view is visible once the router has run; before that the
    // main area stays blank.
    if page.is_visible(app.router.hub_view()) {
        let scroll_to = tui.pending_scroll.take();
        HubView::new(page.sections(), &app.go_to_app, &mut tui.hub_scroll, scroll_to)
            .render(frame, main_area);
    } else if !page.visible_views().is_empty() {
        AppView::new(&app.board, spinner_frame).render(frame, main_area);
    }

    StatusBar::new(
        page.mode().map(str::to_string),
        app.status_message.clone(),
        app.router.is_hub_active(),
    )
    .render(frame, status_area);

    if let Some(notice) = app.board.notice.as_ref().filter(|n| n.visible) {
        NoticeOverlay::new(notice).render(frame, frame.area());
    }
}
