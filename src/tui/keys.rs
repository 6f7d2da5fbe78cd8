/// Keyboard event to action mapping
///
/// While the search box is being edited every printable key goes to the
/// query; otherwise keys are single-letter commands for the current screen.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::action::Action;
use super::state::{AppState, Screen};

fn handle_search_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::CommitSearch),
        KeyCode::Esc => Some(Action::CancelSearch),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::SearchInput(c))
        }
        _ => None,
    }
}

fn handle_browse_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('/') => Some(Action::EnterSearch),
        KeyCode::Char('s') => Some(Action::NextSquad),
        KeyCode::Char('S') => Some(Action::PrevSquad),
        KeyCode::Char('p') => Some(Action::NextPosition),
        KeyCode::Char('P') => Some(Action::PrevPosition),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::NextAvailability),
        KeyCode::Char('v') | KeyCode::Char('V') => Some(Action::ToggleView),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::ClearFilters),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::IncreasePageSize),
        KeyCode::Char('-') => Some(Action::DecreasePageSize),
        KeyCode::Char('i') | KeyCode::Char('I') => Some(Action::ToggleInjuries),
        KeyCode::Right => Some(Action::NextPage),
        KeyCode::Left => Some(Action::PrevPage),
        _ => None,
    }
}

fn handle_injury_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('i') | KeyCode::Char('I') | KeyCode::Esc => Some(Action::ToggleInjuries),
        KeyCode::Tab | KeyCode::Char('m') => Some(Action::NextMetric),
        KeyCode::BackTab | KeyCode::Char('M') => Some(Action::PrevMetric),
        KeyCode::Right => Some(Action::NextCategory),
        KeyCode::Left => Some(Action::PrevCategory),
        KeyCode::Down => Some(Action::NextSeason),
        KeyCode::Up => Some(Action::PrevSeason),
        _ => None,
    }
}

/// Convert a key event into an action for the current state
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    // Ctrl-C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match state.screen {
        Screen::Injuries => handle_injury_keys(key),
        Screen::Roster if state.is_searching() => handle_search_keys(key),
        Screen::Roster => handle_browse_keys(key),
    };
    trace!("KEY: {:?} -> {:?}", key.code, action);
    action
}
