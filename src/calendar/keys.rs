/// Keyboard event to action mapping for the open dialog
///
/// Keys that map to `None` are not consumed, so the host keeps its default
/// handling for them (typing into the input, quitting, and so on).
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use super::action::Action;
use super::host::{DialogControl, Host};
use super::navigator::CalendarNavigator;

/// Arrow/Home/End/PageUp/PageDown while a day cell has focus
fn handle_grid_keys(key: KeyEvent) -> Option<Action> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Left => Some(Action::PrevDay),
        KeyCode::Right => Some(Action::NextDay),
        KeyCode::Up => Some(Action::PrevWeek),
        KeyCode::Down => Some(Action::NextWeek),
        KeyCode::Home => Some(Action::FirstDayOfWeek),
        KeyCode::End => Some(Action::LastDayOfWeek),
        KeyCode::PageUp if shift => Some(Action::PrevYear),
        KeyCode::PageUp => Some(Action::PrevMonth),
        KeyCode::PageDown if shift => Some(Action::NextYear),
        KeyCode::PageDown => Some(Action::NextMonth),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectFocused),
        _ => None,
    }
}

/// Escape and the Tab focus trap, valid on every dialog control
fn handle_dialog_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::Close),
        KeyCode::BackTab => Some(Action::FocusPrevControl),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(Action::FocusPrevControl),
        KeyCode::Tab => Some(Action::FocusNextControl),
        _ => None,
    }
}

/// Map a key press to a calendar action
///
/// Returns `None` while the dialog is closed; opening it is the host's
/// business (trigger button).
pub fn key_to_action<H: Host>(key: KeyEvent, navigator: &CalendarNavigator<H>) -> Option<Action> {
    if key.kind == KeyEventKind::Release || !navigator.is_open() {
        return None;
    }

    if let Some(action) = handle_dialog_keys(key) {
        debug!("KEY: {:?} -> {:?}", key.code, action);
        return Some(action);
    }

    let action = match navigator.active_control() {
        DialogControl::Grid => handle_grid_keys(key),
        _ => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ActivateControl),
            _ => None,
        },
    };

    if let Some(action) = &action {
        debug!("KEY: {:?} -> {:?}", key.code, action);
    }
    action
}
