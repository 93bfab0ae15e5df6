//! Event handling for the ratatui TUI
//!
//! Translates keyboard and mouse events into [`Action`]s. Dropdown navigation
//! keys come from the keybind config; everything else is fixed.

use super::state::Focus;
use crate::keybinds::KeybindConfig;
use crate::search::NavKey;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// What an event asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Dropdown navigation in the query input
    Navigate(NavKey),
    Insert(char),
    Backspace,
    /// Clear button
    ClearQuery,
    /// Move focus between the query input and the category selector
    ToggleFocus,
    /// Step through the category selector
    CycleCategory(isize),
    /// Pointer press at a terminal cell
    Click { column: u16, row: u16 },
    /// Scroll the menu listing
    Scroll(isize),
    /// Nothing to do (no event, resize, unbound key)
    Ignored,
}

/// Convert a key event to a string representation such as `"ctrl-n"`
#[must_use]
pub fn key_to_string(key: &KeyEvent) -> Option<String> {
    let base = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "bspace".to_string(),
        KeyCode::Delete => "del".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdn".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "btab".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => return None,
    };

    let mut result = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        result.push_str("ctrl-");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        result.push_str("alt-");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT)
        && !matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab)
    {
        result.push_str("shift-");
    }
    result.push_str(&base);

    Some(result)
}

/// Map a key press to an action for the focused control
#[must_use]
pub fn map_key(key: &KeyEvent, focus: Focus, keybinds: &KeybindConfig) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match focus {
        Focus::Input => map_input_key(key, keybinds),
        Focus::Categories => map_category_key(key),
    }
}

fn map_input_key(key: &KeyEvent, keybinds: &KeybindConfig) -> Action {
    if let Some(nav) = key_to_string(key).and_then(|k| keybinds.resolve(&k)) {
        return Action::Navigate(nav);
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearQuery,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::Insert(c),
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Tab | KeyCode::BackTab, _) => Action::ToggleFocus,
        (KeyCode::PageUp, _) => Action::Scroll(-10),
        (KeyCode::PageDown, _) => Action::Scroll(10),
        _ => Action::Ignored,
    }
}

fn map_category_key(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Action::CycleCategory(-1),
        KeyCode::Right | KeyCode::Char('l') => Action::CycleCategory(1),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Enter => Action::ToggleFocus,
        KeyCode::Up | KeyCode::Char('k') => Action::Scroll(-1),
        KeyCode::Down | KeyCode::Char('j') => Action::Scroll(1),
        KeyCode::PageUp => Action::Scroll(-10),
        KeyCode::PageDown => Action::Scroll(10),
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        _ => Action::Ignored,
    }
}

/// Map a mouse event to an action
#[must_use]
pub fn map_mouse(mouse: &MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(_) => Action::Click {
            column: mouse.column,
            row: mouse.row,
        },
        MouseEventKind::ScrollUp => Action::Scroll(-3),
        MouseEventKind::ScrollDown => Action::Scroll(3),
        _ => Action::Ignored,
    }
}

/// Poll for an event and translate it
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_action(
    focus: Focus,
    keybinds: &KeybindConfig,
    timeout: Duration,
) -> std::io::Result<Action> {
    if !event::poll(timeout)? {
        return Ok(Action::Ignored);
    }

    let action = match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => map_key(&key, focus, keybinds),
        Event::Mouse(mouse) => map_mouse(&mouse),
        _ => Action::Ignored,
    };

    Ok(action)
}
