//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::Section;

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Page command bound to a key while browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCommand {
    /// Scroll by a signed number of rows.
    ScrollBy(isize),
    /// Scroll up one viewport.
    PageUp,
    /// Scroll down one viewport.
    PageDown,
    /// Smooth scroll back to the top.
    ScrollTop,
    /// Jump to the bottom.
    ScrollBottom,
    /// Jump to a navigation section.
    Jump(Section),
    /// Focus the contact form.
    EditContact,
    /// Open the resume.
    OpenResume,
    /// Copy the contact e-mail.
    CopyEmail,
}

/// Terminal key mapping.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is a quit event.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } | KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Checks if key force-quits even while typing into a form.
    #[must_use]
    pub fn is_force_quit_event(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Checks if key submits the contact form from any field.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Maps a key to a page command.
    #[must_use]
    pub fn page_command(key: &KeyEvent) -> Option<PageCommand> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        let command = match key.code {
            KeyCode::Char('j') | KeyCode::Down => PageCommand::ScrollBy(1),
            KeyCode::Char('k') | KeyCode::Up => PageCommand::ScrollBy(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => PageCommand::PageDown,
            KeyCode::PageUp => PageCommand::PageUp,
            KeyCode::Char('g') | KeyCode::Home => PageCommand::ScrollTop,
            KeyCode::Char('G') | KeyCode::End => PageCommand::ScrollBottom,
            KeyCode::Char('c') => PageCommand::EditContact,
            KeyCode::Char('r') => PageCommand::OpenResume,
            KeyCode::Char('y') => PageCommand::CopyEmail,
            KeyCode::Char(digit @ '1'..='4') => {
                let index = digit as usize - '1' as usize;
                PageCommand::Jump(Section::NAV[index])
            }
            _ => return None,
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use test_case::test_case;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_quit_events() {
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Esc,
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_non_quit_events() {
        assert!(!EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_submit_event() {
        assert!(EventHandler::is_submit_event(&make_key_event(
            KeyCode::Char('s'),
            KeyModifiers::CONTROL
        )));
        assert!(!EventHandler::is_submit_event(&make_key_event(
            KeyCode::Char('s'),
            KeyModifiers::NONE
        )));
    }

    #[test_case(KeyCode::Char('j'), PageCommand::ScrollBy(1) ; "j scrolls down")]
    #[test_case(KeyCode::Up, PageCommand::ScrollBy(-1) ; "up arrow scrolls up")]
    #[test_case(KeyCode::Home, PageCommand::ScrollTop ; "home goes to top")]
    #[test_case(KeyCode::Char('G'), PageCommand::ScrollBottom ; "shift g goes to bottom")]
    #[test_case(KeyCode::Char('1'), PageCommand::Jump(Section::Home) ; "first nav entry")]
    #[test_case(KeyCode::Char('4'), PageCommand::Jump(Section::Achievements) ; "last nav entry")]
    #[test_case(KeyCode::Char('y'), PageCommand::CopyEmail ; "copy email")]
    fn test_page_commands(code: KeyCode, expected: PageCommand) {
        let key = make_key_event(code, KeyModifiers::NONE);
        assert_eq!(EventHandler::page_command(&key), Some(expected));
    }

    #[test]
    fn test_unbound_keys() {
        for code in [KeyCode::Char('5'), KeyCode::Char('x'), KeyCode::Tab] {
            assert_eq!(
                EventHandler::page_command(&make_key_event(code, KeyModifiers::NONE)),
                None
            );
        }
        assert_eq!(
            EventHandler::page_command(&make_key_event(
                KeyCode::Char('j'),
                KeyModifiers::CONTROL
            )),
            None
        );
    }
}
