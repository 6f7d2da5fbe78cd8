/// Widget-based rendering for the roster TUI
///
/// Widgets render themselves directly to a ratatui Buffer, which keeps them
/// testable: every widget can be drawn into a test buffer and inspected.

#[cfg(test)]
pub mod testing;

pub mod athlete_table;
pub use athlete_table::AthleteTable;

pub mod filter_bar;
pub use filter_bar::FilterBar;

pub mod injury_chart;
pub use injury_chart::InjuryChartView;

pub mod ladder;
pub use ladder::LadderView;

pub mod section_header;

pub mod status_bar;
pub use status_bar::StatusBar;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// # Object Safety
///
/// This trait is object-safe, meaning you can use trait objects to store
/// different widget types in collections.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}

/// Write `text` at column offset `x` of row `y`, clipped to `area`
///
/// Returns the column offset just past the written text.
pub(crate) fn put_str(area: Rect, buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style) -> u16 {
    if y >= area.bottom() || area.x + x >= area.right() {
        return x;
    }
    let remaining = (area.right() - area.x - x) as usize;
    let (end, _) = buf.set_stringn(area.x + x, y, text, remaining, style);
    end - area.x
}
