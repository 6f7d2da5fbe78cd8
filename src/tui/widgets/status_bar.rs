use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::formatting::fit_width;
use super::RenderableWidget;

/// Roster screen key reminder
pub const KEY_HINTS: &str = "/ search  s squad  p position  a status  v view  \u{2190}\u{2192} page  +/- size  c clear  i injuries  q quit";

/// Injuries screen key reminder
pub const INJURY_HINTS: &str = "tab metric  \u{2190}\u{2192} category  \u{2191}\u{2193} season  i roster  q quit";

/// StatusBar widget - separator line, then message on the left and the
/// "Updated N minutes ago" label on the right
pub struct StatusBar {
    pub message: Option<String>,
    /// Shown when there is no message
    pub hints: &'static str,
    pub updated: String,
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        let chars = &config.box_chars;
        let mut lines = Vec::new();

        // Calculate where the vertical bar should be
        let right_text = format!(" {} ", self.updated);
        let bar_position = area.width.saturating_sub(right_text.width() as u16 + 1);

        // First line: horizontal separator with connector
        let left_part = chars.horizontal.repeat(bar_position as usize);
        let right_part = chars
            .horizontal
            .repeat(area.width.saturating_sub(bar_position + 1) as usize);
        lines.push(Line::raw(format!("{}{}{}", left_part, chars.top_junction, right_part)));

        // Second line: message on the left, updated label on the right
        let (left_text, left_style) = match &self.message {
            Some(msg) => (format!(" {}", msg), Style::default().fg(config.selection_fg)),
            None => (format!(" {}", self.hints), Style::default().add_modifier(Modifier::DIM)),
        };
        // Hints give way to the label on narrow terminals
        let left_text = fit_width(&left_text, bar_position as usize, &chars.ellipsis);
        lines.push(Line::from(vec![
            Span::styled(left_text, left_style),
            Span::raw(chars.vertical.clone()),
            Span::raw(right_text),
        ]));

        Paragraph::new(lines).render(area, buf);
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }
}
