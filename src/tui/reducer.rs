use tracing::debug;

use super::action::Action;
use super::state::{AppState, InjuryCursor, InputMode, Screen};
use crate::availability::AvailabilityStatus;
use crate::filter::Selector;
use crate::injuries::InjuryMetric;
use crate::view::ViewMode;

/// Largest page size reachable with `+`
pub const MAX_PAGE_SIZE: usize = 50;

/// Pure state reducer - like Redux reducer
///
/// Takes the current state and an action and returns the new state. All
/// filtering and projection happens inside the view state; nothing here
/// performs I/O.
pub fn reduce(state: AppState, action: &Action) -> AppState {
    let mut state = state;
    debug!("ACTION: {:?}", action);

    match action {
        Action::EnterSearch => {
            state.input_mode = InputMode::Search;
        }
        Action::SearchInput(c) => {
            let mut query = state.view.criteria().query.clone();
            query.push(*c);
            state.view.set_query(&query);
        }
        Action::SearchBackspace => {
            let mut query = state.view.criteria().query.clone();
            if query.pop().is_some() {
                state.view.set_query(&query);
            }
        }
        Action::CommitSearch => {
            state.input_mode = InputMode::Browse;
        }
        Action::CancelSearch => {
            state.input_mode = InputMode::Browse;
            state.view.set_query("");
        }

        Action::NextSquad | Action::PrevSquad => {
            let next = cycle(
                &state.view.criteria().squad,
                state.view.squads(),
                matches!(action, Action::NextSquad),
            );
            state.view.set_squad(next);
        }
        Action::NextPosition | Action::PrevPosition => {
            let next = cycle(
                &state.view.criteria().position,
                state.view.positions(),
                matches!(action, Action::NextPosition),
            );
            state.view.set_position(next);
        }
        Action::NextAvailability => {
            let next = cycle(
                &state.view.criteria().availability,
                &AvailabilityStatus::all(),
                true,
            );
            state.view.set_availability(next);
        }
        Action::ClearFilters => {
            state.view.clear_filters();
        }

        Action::ToggleView => {
            let mode = state.view.view_mode().toggle();
            state.view.set_view_mode(mode);
        }
        Action::NextPage => {
            let page = state.view.page();
            if state.view.view_mode() == ViewMode::Ladder && page + 1 < state.view.page_count() {
                state.view.set_page(page + 1);
            }
        }
        Action::PrevPage => {
            let page = state.view.page();
            if page > 0 {
                state.view.set_page(page - 1);
            }
        }
        Action::IncreasePageSize => {
            let size = state.view.page_size();
            if size < MAX_PAGE_SIZE {
                resize(&mut state, size + 1);
            }
        }
        Action::DecreasePageSize => {
            let size = state.view.page_size();
            if size > 1 {
                resize(&mut state, size - 1);
            }
        }

        Action::ToggleInjuries => {
            state.screen = match state.screen {
                Screen::Roster => Screen::Injuries,
                Screen::Injuries => Screen::Roster,
            };
            state.input_mode = InputMode::Browse;
        }
        Action::NextMetric | Action::PrevMetric => {
            let available: Vec<InjuryMetric> = state
                .injuries
                .datasets()
                .iter()
                .map(|d| d.metric)
                .collect();
            if let Some(metric) = step(
                &available,
                state.injury_cursor.metric,
                matches!(action, Action::NextMetric),
            ) {
                // A new tab starts on its first bar
                state.injury_cursor = InjuryCursor { metric, season: 0, series: 0 };
            }
        }
        Action::NextSeason | Action::PrevSeason | Action::NextCategory | Action::PrevCategory => {
            move_bar(&mut state, action);
        }

        Action::Tick(now) => {
            state.now = *now;
            // Status messages live until the next tick
            state.status_message = None;
        }
        Action::Quit => {}
    }

    state
}

fn resize(state: &mut AppState, size: usize) {
    match state.view.set_page_size(size) {
        Ok(()) => state.status_message = Some(format!("{} per group", size)),
        Err(e) => state.status_message = Some(e.to_string()),
    }
}

/// Wrapping step through `options`; unknown `current` starts at the front
fn step<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let len = options.len();
    let next = match options.iter().position(|o| *o == current) {
        None => 0,
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
    };
    Some(options[next])
}

/// Move the selected bar, staying inside the chart
fn move_bar(state: &mut AppState, action: &Action) {
    let Some(chart) = state.injury_chart() else {
        return;
    };
    let cursor = &mut state.injury_cursor;
    match action {
        Action::NextSeason if cursor.season + 1 < chart.seasons.len() => cursor.season += 1,
        Action::PrevSeason => cursor.season = cursor.season.saturating_sub(1),
        Action::NextCategory if cursor.series + 1 < chart.series.len() => cursor.series += 1,
        Action::PrevCategory => cursor.series = cursor.series.saturating_sub(1),
        _ => {}
    }
}

/// Step a selector through `All, options[0], .., options[n-1], All`
fn cycle<T>(current: &Selector<T>, options: &[T], forward: bool) -> Selector<T>
where
    T: Clone + PartialEq,
{
    if options.is_empty() {
        return Selector::All;
    }
    let position = match current {
        Selector::All => None,
        Selector::Only(value) => options.iter().position(|o| o == value),
    };
    let next = match (position, forward) {
        (None, true) => Some(0),
        (None, false) => Some(options.len() - 1),
        (Some(i), true) if i + 1 < options.len() => Some(i + 1),
        (Some(_), true) => None,
        (Some(0), false) => None,
        (Some(i), false) => Some(i - 1),
    };
    next.map_or(Selector::All, |i| Selector::Only(options[i].clone()))
}
