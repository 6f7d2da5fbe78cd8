/// FilterBar widget - current search text, facet selections and view mode

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::filter::FilterCriteria;
use crate::view::ViewMode;
use super::{put_str, RenderableWidget};

pub struct FilterBar<'a> {
    pub criteria: &'a FilterCriteria,
    pub view_mode: ViewMode,
    /// The search box has keyboard focus
    pub editing: bool,
}

fn selection_label<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(|| "All".to_string(), |v| v.to_string())
}

impl RenderableWidget for FilterBar<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        let label = Style::default().add_modifier(Modifier::DIM);
        let value = Style::default().fg(config.selection_fg);
        let y = area.y;

        let x = put_str(area, buf, 0, y, "Search: ", label);
        let query_style = if self.editing {
            value.add_modifier(Modifier::UNDERLINED)
        } else {
            value
        };
        let mut x = put_str(area, buf, x, y, &self.criteria.query, query_style);
        if self.editing {
            x = put_str(area, buf, x, y, "_", value.add_modifier(Modifier::SLOW_BLINK));
        }

        let facets = [
            ("Squad", selection_label(self.criteria.squad.as_option())),
            ("Position", selection_label(self.criteria.position.as_option())),
            ("Status", selection_label(self.criteria.availability.as_option())),
            ("View", self.view_mode.to_string()),
        ];
        for (name, selected) in facets {
            x = put_str(area, buf, x + 2, y, &format!("{}: ", name), label);
            x = put_str(area, buf, x, y, &selected, value);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
