use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    InputChar(char),
    InputBackspace,
    ClearInput,
    Submit,
    Resubmit,
    Quit,
    None,
}

/// The input box always has focus, so plain characters type into it and the
/// command keys all carry a modifier (or are Enter/Esc/Backspace).
pub fn map_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::ClearInput,
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Resubmit,
        KeyCode::Esc => Action::Quit,
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}
