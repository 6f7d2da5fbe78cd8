/// AthleteTable widget - the flat grid of matching athletes
///
/// One row per athlete with name, position, squad, availability and injury.
/// Availability is colored by its tone.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::formatting::fit_width;
use crate::types::Athlete;
use super::{put_str, RenderableWidget};

// Layout Constants
/// Width of athlete name column
pub const NAME_COL_WIDTH: usize = 22;

/// Width of position column
pub const POSITION_COL_WIDTH: usize = 14;

/// Width of squad column
pub const SQUAD_COL_WIDTH: usize = 13;

/// Width of availability column
pub const STATUS_COL_WIDTH: usize = 12;

/// Shown instead of the table when nothing matches
pub const EMPTY_MESSAGE: &str = "No players found";

/// Render the column titles and rule; returns lines used
pub fn render_column_header(area: Rect, y: u16, buf: &mut Buffer, config: &DisplayConfig) -> u16 {
    if y >= area.bottom() {
        return 0;
    }
    let style = Style::default().add_modifier(Modifier::BOLD);
    let titles = format!(
        "{}{}{}{}Injury",
        fit_width("Name", NAME_COL_WIDTH + 1, ""),
        fit_width("Position", POSITION_COL_WIDTH + 1, ""),
        fit_width("Squad", SQUAD_COL_WIDTH + 1, ""),
        fit_width("Status", STATUS_COL_WIDTH + 1, ""),
    );
    put_str(area, buf, 0, y, &titles, style);

    if y + 1 >= area.bottom() {
        return 1;
    }
    let rule = config.box_chars.horizontal.repeat(area.width as usize);
    put_str(area, buf, 0, y + 1, &rule, Style::default());
    2
}

/// Render a single athlete at row `y`
pub fn render_athlete_row(
    athlete: &Athlete,
    area: Rect,
    y: u16,
    buf: &mut Buffer,
    config: &DisplayConfig,
) {
    let ellipsis = &config.box_chars.ellipsis;
    let plain = Style::default();

    let x = put_str(area, buf, 0, y, &fit_width(&athlete.full_name(), NAME_COL_WIDTH, ellipsis), plain);
    let x = put_str(area, buf, x + 1, y, &fit_width(&athlete.position, POSITION_COL_WIDTH, ellipsis), plain);
    let x = put_str(area, buf, x + 1, y, &fit_width(&athlete.squad_name, SQUAD_COL_WIDTH, ellipsis), plain);

    let status = athlete.availability_status;
    let status_style = Style::default().fg(config.status_fg(status));
    let x = put_str(area, buf, x + 1, y, &fit_width(status.name(), STATUS_COL_WIDTH, ellipsis), status_style);

    let injury_style = if athlete.has_active_injury() {
        Style::default().fg(config.injured_fg)
    } else {
        plain
    };
    put_str(area, buf, x + 1, y, &athlete.injury_status, injury_style);
}

/// Grid view: every match, unpaginated
pub struct AthleteTable<'a> {
    pub athletes: &'a [Athlete],
}

impl RenderableWidget for AthleteTable<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        if self.athletes.is_empty() {
            put_str(area, buf, 0, area.y, EMPTY_MESSAGE, Style::default().fg(config.error_fg));
            return;
        }

        let mut y = area.y + render_column_header(area, area.y, buf, config);
        for (i, athlete) in self.athletes.iter().enumerate() {
            if y >= area.bottom() {
                break;
            }
            let remaining = self.athletes.len() - i;
            if y + 1 == area.bottom() && remaining > 1 {
                // Out of room: say how many rows are hidden
                let more = format!("+{} more", remaining);
                put_str(area, buf, 0, y, &more, Style::default().add_modifier(Modifier::DIM));
                break;
            }
            render_athlete_row(athlete, area, y, buf, config);
            y += 1;
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        if self.athletes.is_empty() {
            Some(1)
        } else {
            Some(self.athletes.len() as u16 + 2)
        }
    }
}
