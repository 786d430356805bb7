use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
    /// Run `service.locate`(...) on the typed coordinates
    Resolve,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{BackTab, Backspace, Char, Down, Enter, Esc, Tab, Up};

    // Global quit shortcuts
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if matches!(key.code, Char('q') | Esc) {
        return Action::Quit;
    }

    match key.code {
        Tab | BackTab | Up | Down => app.toggle_field(),
        Char('l') => app.cycle_language(),
        Char(character) if character.is_ascii_digit() || matches!(character, '.' | '-') => {
            app.active_input_mut().push(character);
        }
        Backspace => {
            app.active_input_mut().pop();
        }
        Enter => return Action::Resolve,
        _ => {}
    }
    Action::None
}
