use anyhow::{Context, Result};

use crate::availability::AvailabilityStatus;
use crate::config::{Config, DisplayConfig};
use crate::data_provider::AthleteRepository;
use crate::filter::Selector;
use crate::formatting::{fit_width, format_header};
use crate::projector::GroupedPage;
use crate::types::Athlete;
use crate::view::{Projection, ViewMode, ViewSettings, ViewState};

// Layout Constants
/// Width of athlete name column
const NAME_COL_WIDTH: usize = 24;

/// Width of position column
const POSITION_COL_WIDTH: usize = 14;

/// Width of squad column
const SQUAD_COL_WIDTH: usize = 14;

/// Width of availability column
const STATUS_COL_WIDTH: usize = 12;

/// Width of the rule under the table header
const TABLE_WIDTH: usize = 80;

/// Shown in place of a table when nothing matches
pub const NO_PLAYERS_FOUND: &str = "No players found";

/// Arguments of the `list` command
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub query: Option<String>,
    pub squad: Selector<String>,
    pub position: Selector<String>,
    pub availability: Selector<AvailabilityStatus>,
    pub view: Option<ViewMode>,
    pub page: usize,
    pub page_size: Option<usize>,
}

/// Apply `options` to a freshly mounted view
pub fn build_view(
    repository: &dyn AthleteRepository,
    config: &Config,
    options: ListOptions,
) -> Result<ViewState> {
    let taxonomy = config.taxonomy().context("Invalid position_groups in config")?;
    let defaults = config.view_settings();
    let settings = ViewSettings {
        view_mode: options.view.unwrap_or(defaults.view_mode),
        page_size: options.page_size.unwrap_or(defaults.page_size),
    };
    let mut state = ViewState::mount(repository, taxonomy, settings).context("Invalid page size")?;

    if let Some(query) = &options.query {
        state.set_query(query);
    }
    state.set_squad(options.squad);
    state.set_position(options.position);
    state.set_availability(options.availability);
    state.set_page(options.page);
    Ok(state)
}

fn format_table_header(display: &DisplayConfig) -> String {
    format!(
        "{:<name_width$} {:<pos_width$} {:<squad_width$} {:<status_width$} Injury\n{}\n",
        "Name",
        "Position",
        "Squad",
        "Status",
        display.box_chars.horizontal.repeat(TABLE_WIDTH),
        name_width = NAME_COL_WIDTH,
        pos_width = POSITION_COL_WIDTH,
        squad_width = SQUAD_COL_WIDTH,
        status_width = STATUS_COL_WIDTH,
    )
}

fn format_athlete_row(athlete: &Athlete, display: &DisplayConfig) -> String {
    let ellipsis = &display.box_chars.ellipsis;
    format!(
        "{} {} {} {:<status_width$} {}\n",
        fit_width(&athlete.full_name(), NAME_COL_WIDTH, ellipsis),
        fit_width(&athlete.position, POSITION_COL_WIDTH, ellipsis),
        fit_width(&athlete.squad_name, SQUAD_COL_WIDTH, ellipsis),
        athlete.availability_status.name(),
        athlete.injury_status,
        status_width = STATUS_COL_WIDTH,
    )
}

/// Flat list of every match, in roster order
pub fn format_grid(athletes: &[Athlete], display: &DisplayConfig) -> String {
    if athletes.is_empty() {
        return format!("{}\n", NO_PLAYERS_FOUND);
    }

    let mut output = format_table_header(display);
    for athlete in athletes {
        output.push_str(&format_athlete_row(athlete, display));
    }
    output
}

/// One section per position group, showing the requested page of each
pub fn format_ladder(page: &GroupedPage, display: &DisplayConfig) -> String {
    if page.total() == 0 {
        return format!("{}\n", NO_PLAYERS_FOUND);
    }

    let mut output = String::new();
    for group in &page.groups {
        let title = format!("{} ({})", group.label, group.total);
        output.push_str(&format_header(&title, false, display));
        if group.athletes.is_empty() {
            output.push_str("  -\n");
        } else {
            for athlete in &group.athletes {
                output.push_str(&format_athlete_row(athlete, display));
            }
        }
        output.push('\n');
    }
    output.push_str(&format!(
        "Page {} of {} ({} per group)\n",
        page.page + 1,
        page.page_count(),
        page.page_size
    ));
    output
}

pub fn format_projection(state: &ViewState, display: &DisplayConfig) -> String {
    let body = match state.projection() {
        Projection::Grid(athletes) => format_grid(athletes, display),
        Projection::Ladder(page) => format_ladder(page, display),
    };
    let heading = format!(
        "Roster: {} of {} athletes ({} view)",
        state.filtered_count(),
        state.athletes().len(),
        state.view_mode()
    );
    format!("{}\n{}", format_header(&heading, true, display), body)
}

pub fn run(repository: &dyn AthleteRepository, config: &Config, options: ListOptions) -> Result<()> {
    let state = build_view(repository, config, options)?;
    print!("{}", format_projection(&state, &config.display()));
    Ok(())
}
