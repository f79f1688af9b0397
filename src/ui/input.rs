use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    Select,
    EditAccount,
    InputChar(char),
    InputBackspace,
    InputConfirm,
    InputCancel,
    ToggleMode,
    Refresh,
    Help,
    ClosePopup,
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Account,
}

impl InputMode {
    pub fn is_editing(self) -> bool {
        self == InputMode::Account
    }
}

pub fn map_key(key: KeyEvent, input_mode: InputMode) -> Action {
    if input_mode.is_editing() {
        return match key.code {
            KeyCode::Esc => Action::InputCancel,
            KeyCode::Enter => Action::InputConfirm,
            KeyCode::Backspace => Action::InputBackspace,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char(c) => Action::InputChar(c),
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::Enter => Action::Select,
        KeyCode::Char('/') | KeyCode::Char('u') => Action::EditAccount,
        KeyCode::Char('m') => Action::ToggleMode,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc => Action::ClosePopup,
        _ => Action::None,
    }
}
