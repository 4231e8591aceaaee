use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit,
    Select,
    Back,
    MarkComplete,
    MarkIncomplete,

    // TUI-local events (handled directly in TUI)
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    Home,
    End,
    ScrollUp,
    ScrollDown,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
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
    })
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Some terminals report release events too; act on press only
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Enter) => Some(TuiEvent::Select),
        (_, KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b')) => Some(TuiEvent::Back),
        (_, KeyCode::Char('c')) => Some(TuiEvent::MarkComplete),
        (_, KeyCode::Char('u')) => Some(TuiEvent::MarkIncomplete),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
        (_, KeyCode::PageDown | KeyCode::Char(' ')) => Some(TuiEvent::PageDown),
        (_, KeyCode::Home | KeyCode::Char('g')) => Some(TuiEvent::Home),
        (_, KeyCode::End | KeyCode::Char('G')) => Some(TuiEvent::End),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_is_force_quit() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ev), Some(TuiEvent::ForceQuit));
    }

    #[test]
    fn test_plain_c_marks_complete() {
        assert_eq!(map_key(key(KeyCode::Char('c'))), Some(TuiEvent::MarkComplete));
        assert_eq!(map_key(key(KeyCode::Char('u'))), Some(TuiEvent::MarkIncomplete));
    }

    #[test]
    fn test_back_keys() {
        for code in [KeyCode::Esc, KeyCode::Backspace, KeyCode::Char('b')] {
            assert_eq!(map_key(key(code)), Some(TuiEvent::Back));
        }
    }

    #[test]
    fn test_vim_movement() {
        assert_eq!(map_key(key(KeyCode::Char('j'))), Some(TuiEvent::CursorDown));
        assert_eq!(map_key(key(KeyCode::Char('k'))), Some(TuiEvent::CursorUp));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut ev = key(KeyCode::Enter);
        ev.kind = KeyEventKind::Release;
        assert_eq!(map_key(ev), None);
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), None);
    }
}
