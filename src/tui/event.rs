use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    ForceQuit, // Ctrl+C, quits even with the notice open
    Submit,
    Escape,

    // Navigation
    NextLink,
    PrevLink,
    SelectLink(usize), // number keys, 0-based
    GoToApp,

    // Quote panel
    NewQuote,

    ScrollUp,
    ScrollDown,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, waiting up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Translate a key press into a `TuiEvent`. Releases and repeats are dropped.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char(c @ '1'..='9')) => {
            Some(TuiEvent::SelectLink(c as usize - '1' as usize))
        }
        (_, KeyCode::Char('g')) => Some(TuiEvent::GoToApp),
        (_, KeyCode::Char('n') | KeyCode::Char(' ')) => Some(TuiEvent::NewQuote),
        (_, KeyCode::Char('k') | KeyCode::Up) => Some(TuiEvent::ScrollUp),
        (_, KeyCode::Char('j') | KeyCode::Down) => Some(TuiEvent::ScrollDown),
        (_, KeyCode::Tab | KeyCode::Right) => Some(TuiEvent::NextLink),
        (_, KeyCode::BackTab | KeyCode::Left) => Some(TuiEvent::PrevLink),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_number_keys_select_links() {
        assert_eq!(map_key(press(KeyCode::Char('1'))), Some(TuiEvent::SelectLink(0)));
        assert_eq!(map_key(press(KeyCode::Char('4'))), Some(TuiEvent::SelectLink(3)));
        assert_eq!(map_key(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(TuiEvent::ForceQuit));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(press(KeyCode::Tab)), Some(TuiEvent::NextLink));
        assert_eq!(map_key(press(KeyCode::BackTab)), Some(TuiEvent::PrevLink));
        assert_eq!(map_key(press(KeyCode::Char('g'))), Some(TuiEvent::GoToApp));
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(TuiEvent::NewQuote));
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
    }
}
