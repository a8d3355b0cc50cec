//! Key bindings per screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::AppState;

/// Everything a key press can ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    CursorNext,
    CursorPrevious,
    Select(usize),
    Confirm,
    Next,
    NameChar(char),
    NameBackspace,
    SaveScore,
    Restart,
    ScrollDown,
    ScrollUp,
    ToggleTheme,
    Quit,
}

/// Map a key press to an action. `name_form_open` routes printable keys
/// into the name field on the results screen.
pub fn action_for(state: AppState, name_form_open: bool, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Tab {
        return Some(Action::ToggleTheme);
    }
    if key.code == KeyCode::Esc {
        return Some(Action::Quit);
    }

    match state {
        AppState::NotStarted => welcome_action(key.code),
        AppState::InProgress => quiz_action(key.code),
        AppState::Complete if name_form_open => name_form_action(key),
        AppState::Complete => result_action(key.code),
    }
}

fn welcome_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Enter => Some(Action::Start),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

fn quiz_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorNext),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Confirm),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::Next),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::Select(d as usize - 1)),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

fn name_form_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(Action::SaveScore),
        KeyCode::Backspace => Some(Action::NameBackspace),
        KeyCode::Char(c) if !c.is_control() => Some(Action::NameChar(c)),
        KeyCode::Down => Some(Action::ScrollDown),
        KeyCode::Up => Some(Action::ScrollUp),
        _ => None,
    }
}

fn result_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}
