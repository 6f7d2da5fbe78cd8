use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::config::DisplayConfig;
use crate::view::Projection;
use super::state::{AppState, Screen};
use super::widgets::status_bar::{INJURY_HINTS, KEY_HINTS};
use super::widgets::{AthleteTable, FilterBar, InjuryChartView, LadderView, RenderableWidget, StatusBar};

/// Draw the current screen from `state`, with the status bar at the bottom
pub fn render_app(state: &AppState, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
    let status_bar = StatusBar {
        message: state.status_message.clone(),
        hints: match state.screen {
            Screen::Roster => KEY_HINTS,
            Screen::Injuries => INJURY_HINTS,
        },
        updated: state.updated_label(),
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(status_bar.preferred_height().unwrap_or(2)),
        ])
        .split(area);

    match state.screen {
        Screen::Roster => render_roster(state, chunks[0], buf, config),
        Screen::Injuries => {
            let chart = state.injury_chart();
            InjuryChartView {
                tabs: state.injuries.datasets().iter().map(|d| d.metric).collect(),
                chart: chart.as_ref(),
                cursor: state.injury_cursor,
            }
            .render(chunks[0], buf, config);
        }
    }
    status_bar.render(chunks[1], buf, config);
}

/// Filter bar on top, the current projection below
fn render_roster(state: &AppState, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
    let filter_bar = FilterBar {
        criteria: state.view.criteria(),
        view_mode: state.view.view_mode(),
        editing: state.is_searching(),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(filter_bar.preferred_height().unwrap_or(1)),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    filter_bar.render(chunks[0], buf, config);
    match state.view.projection() {
        Projection::Grid(athletes) => AthleteTable { athletes }.render(chunks[2], buf, config),
        Projection::Ladder(page) => LadderView { page }.render(chunks[2], buf, config),
    }
}
