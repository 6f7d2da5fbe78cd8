use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::background::updated_label;
use crate::injuries::{ChartData, InjuryInsights, InjuryMetric};
use crate::view::ViewState;

/// Whether keystrokes go to the search box or to commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    Search,
}

/// Which screen fills the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Roster,
    Injuries,
}

/// Selected metric tab and bar on the injuries screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InjuryCursor {
    pub metric: InjuryMetric,
    pub season: usize,
    pub series: usize,
}

/// Root application state - single source of truth
///
/// All state changes happen through the reducer. Widgets receive slices of
/// this state when the frame is drawn.
#[derive(Debug, Clone)]
pub struct AppState {
    pub view: ViewState,
    pub screen: Screen,
    pub input_mode: InputMode,
    pub injuries: Arc<InjuryInsights>,
    pub injury_cursor: InjuryCursor,
    /// When the roster was loaded
    pub loaded_at: DateTime<Utc>,
    /// Last time reported by the refresh ticker
    pub now: DateTime<Utc>,
    /// One-shot message shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(view: ViewState, loaded_at: DateTime<Utc>) -> Self {
        Self {
            view,
            screen: Screen::Roster,
            input_mode: InputMode::Browse,
            injuries: Arc::new(InjuryInsights::default()),
            injury_cursor: InjuryCursor::default(),
            loaded_at,
            now: loaded_at,
            status_message: None,
        }
    }

    /// Attach injury datasets; the cursor starts on the first one
    pub fn with_injuries(mut self, injuries: Arc<InjuryInsights>) -> Self {
        let metric = injuries
            .datasets()
            .first()
            .map_or(InjuryMetric::default(), |d| d.metric);
        self.injury_cursor = InjuryCursor { metric, season: 0, series: 0 };
        self.injuries = injuries;
        self
    }

    /// Chart for the selected metric, if that dataset exists
    pub fn injury_chart(&self) -> Option<ChartData> {
        self.injuries.chart(self.injury_cursor.metric)
    }

    pub fn is_searching(&self) -> bool {
        self.input_mode == InputMode::Search
    }

    pub fn updated_label(&self) -> String {
        updated_label(self.loaded_at, self.now)
    }
}
