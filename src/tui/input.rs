//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::store::Tab;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Switch to the next tab.
    NextTab,
    /// Switch to the previous tab.
    PrevTab,
    /// Jump directly to a tab.
    GoTab(Tab),
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    Home,
    End,
    /// Act on the current row (list) or focus the selection (map).
    Select,
    /// Toggle watch mode (live point only vs. full history).
    ToggleWatch,
    /// Pause/resume the replay feed.
    TogglePause,
}

/// Maps a key event to an action.
pub fn handle_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        KeyCode::Tab => KeyAction::NextTab,
        KeyCode::BackTab => KeyAction::PrevTab,
        KeyCode::Char('1') => KeyAction::GoTab(Tab::List),
        KeyCode::Char('2') => KeyAction::GoTab(Tab::Map),

        KeyCode::Up | KeyCode::Char('k') => KeyAction::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::CursorDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,

        KeyCode::Enter => KeyAction::Select,
        KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::ToggleWatch,
        KeyCode::Char(' ') => KeyAction::TogglePause,

        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        assert_eq!(handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key(ctrl_c), KeyAction::Quit);
        // Plain 'c' does nothing.
        assert_eq!(handle_key(key(KeyCode::Char('c'))), KeyAction::None);
    }

    #[test]
    fn tab_keys() {
        assert_eq!(handle_key(key(KeyCode::Tab)), KeyAction::NextTab);
        assert_eq!(handle_key(key(KeyCode::BackTab)), KeyAction::PrevTab);
        assert_eq!(
            handle_key(key(KeyCode::Char('1'))),
            KeyAction::GoTab(Tab::List)
        );
        assert_eq!(
            handle_key(key(KeyCode::Char('2'))),
            KeyAction::GoTab(Tab::Map)
        );
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(handle_key(key(KeyCode::Up)), KeyAction::CursorUp);
        assert_eq!(handle_key(key(KeyCode::Char('j'))), KeyAction::CursorDown);
        assert_eq!(handle_key(key(KeyCode::PageDown)), KeyAction::PageDown);
        assert_eq!(handle_key(key(KeyCode::Home)), KeyAction::Home);
        assert_eq!(handle_key(key(KeyCode::End)), KeyAction::End);
    }

    #[test]
    fn mode_keys() {
        assert_eq!(handle_key(key(KeyCode::Enter)), KeyAction::Select);
        assert_eq!(handle_key(key(KeyCode::Char('w'))), KeyAction::ToggleWatch);
        assert_eq!(handle_key(key(KeyCode::Char(' '))), KeyAction::TogglePause);
    }
}
