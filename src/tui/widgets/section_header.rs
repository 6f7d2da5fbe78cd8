/// Section header: a title line underlined with box characters

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use crate::config::DisplayConfig;
use crate::formatting::format_header;
use super::put_str;

/// Render `text` and its underline starting at row `y`
///
/// Returns the number of lines rendered (height consumed)
pub fn render_section_header(
    text: &str,
    area: Rect,
    y: u16,
    buf: &mut Buffer,
    config: &DisplayConfig,
) -> u16 {
    let style = Style::default().fg(config.header_fg);
    let mut lines_rendered = 0;

    for (i, line) in format_header(text, false, config).lines().enumerate() {
        let row = y + lines_rendered;
        if row >= area.bottom() {
            break;
        }
        let line_style = if i == 0 { style.add_modifier(Modifier::BOLD) } else { style };
        put_str(area, buf, 0, row, line, line_style);
        lines_rendered += 1;
    }

    lines_rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_section_header_renders_two_lines() {
        let config = test_config();
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        let lines = render_section_header("Defence (7)", area, 0, &mut buf, &config);

        assert_eq!(lines, 2);
        assert_buffer_line(&buf, 0, "Defence (7)");
        assert_buffer_line(&buf, 1, "───────────");
        assert_eq!(buf[(0, 0)].fg, config.header_fg);
    }

    #[test]
    fn test_section_header_clipped_at_bottom() {
        let config = test_config_ascii();
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);

        let lines = render_section_header("Attack (6)", area, 0, &mut buf, &config);

        assert_eq!(lines, 1);
        assert_buffer_line(&buf, 0, "Attack (6)");
    }
}
