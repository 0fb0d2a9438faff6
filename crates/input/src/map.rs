//! Mapping from terminal input to menu choices.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the user picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Command),
    Quit,
}

/// Map a key press to a menu choice.
///
/// Digits `1`-`5` select commands; anything that is not a command or a quit
/// key yields `None` and the caller reports an invalid option.
pub fn handle_key_event(key: KeyEvent) -> Option<MenuChoice> {
    if should_quit(key) {
        return Some(MenuChoice::Quit);
    }
    match key.code {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| Command::from_code(d as u8))
            .map(MenuChoice::Run),
        _ => None,
    }
}

/// Check if key should quit the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('0') | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Parse one line typed in line mode.
///
/// Surrounding whitespace is ignored. `0` quits; `1`-`5` select commands;
/// everything else (including numbers out of range) is `None`.
pub fn parse_choice(line: &str) -> Option<MenuChoice> {
    let code: u8 = line.trim().parse().ok()?;
    if code == 0 {
        return Some(MenuChoice::Quit);
    }
    Command::from_code(code).map(MenuChoice::Run)
}
