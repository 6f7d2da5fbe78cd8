/// LadderView widget - athletes grouped by position group, one page per group
///
/// Every configured group gets a section even when it has no athletes on
/// this page, so the ladder keeps its shape while paging. The last row of
/// the area is reserved for the page indicator.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::projector::GroupedPage;
use super::athlete_table::{render_athlete_row, render_column_header, EMPTY_MESSAGE};
use super::section_header::render_section_header;
use super::{put_str, RenderableWidget};

pub struct LadderView<'a> {
    pub page: &'a GroupedPage,
}

impl LadderView<'_> {
    fn footer(&self) -> String {
        format!(
            "Page {} of {} ({} per group)",
            self.page.page + 1,
            self.page.page_count(),
            self.page.page_size
        )
    }
}

impl RenderableWidget for LadderView<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        if self.page.total() == 0 {
            put_str(area, buf, 0, area.y, EMPTY_MESSAGE, Style::default().fg(config.error_fg));
            return;
        }

        let footer_y = area.bottom() - 1;
        let body = Rect { height: area.height - 1, ..area };
        let dim = Style::default().add_modifier(Modifier::DIM);

        let mut y = area.y + render_column_header(body, area.y, buf, config);
        for group in &self.page.groups {
            if y >= body.bottom() {
                break;
            }
            let title = format!("{} ({})", group.label, group.total);
            y += render_section_header(&title, body, y, buf, config);

            if group.athletes.is_empty() && y < body.bottom() {
                put_str(body, buf, 0, y, "-", dim);
                y += 1;
            }
            for athlete in &group.athletes {
                if y >= body.bottom() {
                    break;
                }
                render_athlete_row(athlete, body, y, buf, config);
                y += 1;
            }
            y += 1;
        }

        put_str(area, buf, 0, footer_y, &self.footer(), dim);
    }

    fn preferred_height(&self) -> Option<u16> {
        if self.page.total() == 0 {
            return Some(1);
        }
        // Column header, then title + rule + rows (or a dash) + gap per group, then footer
        let groups: usize = self
            .page
            .groups
            .iter()
            .map(|g| 3 + g.athletes.len().max(1))
            .sum();
        Some((2 + groups + 1) as u16)
    }
}
