//! Integration tests for the entire interaction flow
//!
//! These tests verify that input flows correctly through the system:
//! Key → Action → Reducer → ViewState → Render

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::{TimeZone, Utc};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{buffer::Buffer, layout::Rect};

    use crate::background::{Clock, FixedClock, RefreshTicker};
    use crate::data_provider::InMemoryRepository;
    use crate::injuries::{InjuryInsights, InjuryMetric};
    use crate::tui::state::Screen;
    use crate::taxonomy::GroupTaxonomy;
    use crate::tui::app::render_app;
    use crate::tui::widgets::testing::{buffer_to_string, test_config};
    use crate::tui::{key_to_action, reduce, Action, AppState};
    use crate::view::{Projection, ViewMode, ViewSettings, ViewState};

    fn bundled_state() -> AppState {
        let repo = InMemoryRepository::bundled().unwrap();
        let view = ViewState::mount(
            &repo,
            GroupTaxonomy::default(),
            ViewSettings { view_mode: ViewMode::Grid, page_size: 2 },
        )
        .unwrap();
        AppState::new(view, Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
    }

    /// Feed key presses through the key map and reducer
    fn press(state: AppState, keys: &[KeyCode]) -> AppState {
        keys.iter().fold(state, |state, code| {
            match key_to_action(KeyEvent::new(*code, KeyModifiers::NONE), &state) {
                Some(action) => reduce(state, &action),
                None => state,
            }
        })
    }

    fn screen(state: &AppState) -> String {
        let mut buf = Buffer::empty(Rect::new(0, 0, 120, 50));
        render_app(state, buf.area, &mut buf, &test_config());
        buffer_to_string(&buf)
    }

    #[test]
    fn test_search_session_filters_and_renders() {
        let state = press(
            bundled_state(),
            &[
                KeyCode::Char('/'),
                KeyCode::Char('s'),
                KeyCode::Char('a'),
                KeyCode::Char('k'),
                KeyCode::Char('a'),
                KeyCode::Enter,
            ],
        );
        assert!(!state.is_searching());
        assert_eq!(state.view.criteria().query, "saka");
        assert_eq!(state.view.filtered_count(), 1);

        let rendered = screen(&state);
        assert!(rendered.contains("Bukayo Saka"));
        assert!(rendered.contains("Search: saka"));
    }

    #[test]
    fn test_injury_screen_round_trip() {
        let state = bundled_state().with_injuries(Arc::new(InjuryInsights::bundled().unwrap()));
        let state = press(state, &[KeyCode::Char('s'), KeyCode::Char('i')]);
        assert_eq!(state.screen, Screen::Injuries);

        // Rates tab, Games bar of the second season; 'v' does nothing here
        let state = press(
            state,
            &[KeyCode::Tab, KeyCode::Right, KeyCode::Down, KeyCode::Char('v')],
        );
        assert_eq!(state.injury_cursor.metric, InjuryMetric::Rates);
        assert_eq!(state.view.view_mode(), ViewMode::Grid);
        let rendered = screen(&state);
        assert!(rendered.contains("Injury Rates (per 100 hours)"));
        assert!(rendered.contains("Season: 2022-23  Category: Games  Value: 5.2"));

        // Back on the roster the squad filter is still applied
        let state = press(state, &[KeyCode::Esc]);
        assert_eq!(state.screen, Screen::Roster);
        let rendered = screen(&state);
        assert!(rendered.contains("Squad: First Team"));
    }

    #[test]
    fn test_letters_are_commands_outside_search() {
        // 's' outside the search box cycles the squad facet
        let state = press(bundled_state(), &[KeyCode::Char('s')]);
        assert_eq!(state.view.criteria().query, "");
        assert_eq!(
            state.view.criteria().squad.as_option().map(String::as_str),
            Some("First Team")
        );
    }

    #[test]
    fn test_ladder_paging_and_reset() {
        let state = press(bundled_state(), &[KeyCode::Char('v')]);
        assert_eq!(state.view.view_mode(), ViewMode::Ladder);
        // Largest default group holds 7 athletes: 4 pages of 2
        assert_eq!(state.view.page_count(), 4);

        let state = press(state, &[KeyCode::Right, KeyCode::Right, KeyCode::Right, KeyCode::Right]);
        assert_eq!(state.view.page(), 3);
        assert!(screen(&state).contains("Page 4 of 4 (2 per group)"));

        // Narrowing the roster goes back to the first page
        let state = press(state, &[KeyCode::Char('a')]);
        assert_eq!(state.view.page(), 0);

        // Clearing filters restores the full ladder
        let state = press(state, &[KeyCode::Char('c')]);
        match state.view.projection() {
            Projection::Ladder(page) => assert_eq!(page.total(), 24),
            Projection::Grid(_) => panic!("expected ladder projection"),
        }
    }

    #[test]
    fn test_unmapped_positions_render_in_other_bucket() {
        let state = press(bundled_state(), &[KeyCode::Char('v')]);
        let rendered = screen(&state);
        assert!(rendered.contains("Other (1)"));
    }

    #[test]
    fn test_escape_clears_search() {
        let state = press(
            bundled_state(),
            &[KeyCode::Char('/'), KeyCode::Char('z'), KeyCode::Char('z'), KeyCode::Esc],
        );
        assert_eq!(state.view.criteria().query, "");
        assert_eq!(state.view.filtered_count(), 24);
    }

    #[test]
    fn test_no_matches_renders_message() {
        let state = press(
            bundled_state(),
            &[KeyCode::Char('/'), KeyCode::Char('q'), KeyCode::Char('x'), KeyCode::Enter],
        );
        assert_eq!(state.view.filtered_count(), 0);
        assert!(screen(&state).contains("No players found"));
    }

    #[tokio::test]
    async fn test_ticker_drives_updated_label() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let clock = Arc::new(FixedClock::new(start + chrono::Duration::minutes(10)));
        let (_ticker, mut ticks) =
            RefreshTicker::start(Arc::clone(&clock) as Arc<dyn Clock>, Duration::from_millis(10));

        let now = tokio::time::timeout(Duration::from_secs(2), ticks.recv())
            .await
            .unwrap()
            .unwrap();
        let state = reduce(bundled_state(), &Action::Tick(now));

        assert_eq!(state.updated_label(), "Updated 10 minutes ago");
        assert!(screen(&state).contains("Updated 10 minutes ago"));
    }
}
