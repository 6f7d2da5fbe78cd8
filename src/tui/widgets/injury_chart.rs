/// InjuryChartView widget - metric tabs, horizontal bars grouped by season,
/// and the detail of the selected bar pinned to the bottom rows

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::formatting::fit_width;
use crate::injuries::{ChartData, InjuryMetric, NO_INJURY_DATA};
use crate::tui::state::InjuryCursor;
use super::section_header::render_section_header;
use super::{put_str, RenderableWidget};

/// Blank line, detail line, explanation
const DETAIL_HEIGHT: u16 = 3;

/// Cell text for a season that did not record a category
const MISSING_VALUE: &str = "-";

pub struct InjuryChartView<'a> {
    /// Metrics that have a dataset, in tab order
    pub tabs: Vec<InjuryMetric>,
    pub chart: Option<&'a ChartData>,
    pub cursor: InjuryCursor,
}

impl InjuryChartView<'_> {
    fn render_tabs(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let dim = Style::default().add_modifier(Modifier::DIM);
        let mut x = 0;
        for (i, metric) in self.tabs.iter().enumerate() {
            if i > 0 {
                x = put_str(area, buf, x, area.y, &config.box_chars.vertical, dim);
            }
            let style = if *metric == self.cursor.metric {
                Style::default().fg(config.selection_fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            x = put_str(area, buf, x, area.y, &format!(" {} ", metric.label()), style);
        }
    }

    /// Season sections starting at row `y`, clipped to `body`
    fn render_bars(&self, chart: &ChartData, body: Rect, mut y: u16, buf: &mut Buffer, config: &DisplayConfig) {
        let chars = &config.box_chars;
        let cells: Vec<Vec<String>> = chart
            .series
            .iter()
            .map(|s| {
                s.data
                    .iter()
                    .map(|v| v.map_or_else(|| MISSING_VALUE.to_string(), |v| chart.metric.format_value(v)))
                    .collect()
            })
            .collect();
        let label_width = chart.series.iter().map(|s| s.label.width()).max().unwrap_or(0);
        let value_width = cells.iter().flatten().map(|c| c.width()).max().unwrap_or(0);
        let marker_width = chars.selector.width() + 1;
        // Marker, label, gap, bar, space, value
        let room = (body.width as usize).saturating_sub(marker_width + label_width + 2 + 1 + value_width);
        let max = chart.max_value();

        let season_style = Style::default().fg(config.header_fg).add_modifier(Modifier::BOLD);
        for (season_index, season) in chart.seasons.iter().enumerate() {
            if y >= body.bottom() {
                break;
            }
            put_str(body, buf, 0, y, season, season_style);
            y += 1;

            for (series_index, series) in chart.series.iter().enumerate() {
                if y >= body.bottom() {
                    break;
                }
                let selected = season_index == self.cursor.season && series_index == self.cursor.series;
                let (marker, style, bar_style) = if selected {
                    let style = Style::default().fg(config.selection_fg).add_modifier(Modifier::BOLD);
                    (format!("{} ", chars.selector), style, style)
                } else {
                    (" ".repeat(marker_width), Style::default(), Style::default().fg(config.header_fg))
                };
                let length = match chart.value(season_index, series_index) {
                    Some(v) if max > 0.0 => ((v.max(0.0) / max) * room as f64).round() as usize,
                    _ => 0,
                };

                let mut x = put_str(body, buf, 0, y, &marker, style);
                x = put_str(body, buf, x, y, &fit_width(&series.label, label_width, &chars.ellipsis), style);
                x = put_str(body, buf, x + 2, y, &chars.bar.repeat(length.min(room)), bar_style);
                put_str(body, buf, x + 1, y, &cells[series_index][season_index], style);
                y += 1;
            }
            y += 1;
        }
    }
}

impl RenderableWidget for InjuryChartView<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        self.render_tabs(area, buf, config);

        let Some(chart) = self.chart.filter(|c| !c.is_empty()) else {
            put_str(area, buf, 0, area.y + 2, NO_INJURY_DATA, Style::default().fg(config.error_fg));
            return;
        };

        let show_detail = area.height > DETAIL_HEIGHT + 2;
        let body = if show_detail {
            Rect { height: area.height - DETAIL_HEIGHT, ..area }
        } else {
            area
        };

        let mut y = area.y + 2;
        y += render_section_header(&chart.title, body, y, buf, config);
        if y < body.bottom() {
            put_str(body, buf, 0, y, &chart.description, Style::default().add_modifier(Modifier::DIM));
        }
        self.render_bars(chart, body, y + 2, buf, config);

        if let Some(detail) = chart.detail(self.cursor.season, self.cursor.series).filter(|_| show_detail) {
            let line = format!(
                "Season: {}  Category: {}  Value: {}",
                detail.season,
                detail.category,
                detail.value_text()
            );
            put_str(area, buf, 0, area.bottom() - 2, &line, Style::default().fg(config.selection_fg));
            put_str(
                area,
                buf,
                0,
                area.bottom() - 1,
                &detail.explanation(),
                Style::default().add_modifier(Modifier::DIM),
            );
        }
    }
}
