use anyhow::Result;

use crate::availability::AvailabilityStatus;
use crate::config::{Config, DisplayConfig};
use crate::data_provider::AthleteRepository;
use crate::formatting::{fit_width, format_header};
use crate::summary::{percentage, RosterSummary};

/// Width of the squad name column
const SQUAD_COL_WIDTH: usize = 16;

/// Width of each numeric column
const COUNT_COL_WIDTH: usize = 7;

pub fn format_summary(summary: &RosterSummary, display: &DisplayConfig) -> String {
    let mut output = format_header("Roster Summary", true, display);
    output.push_str(&format!("{:<20} {}\n", "Athletes", summary.total));
    output.push_str(&format!("{:<20} {}%\n", "Fit to play", summary.fit_to_play_index));
    output.push_str(&format!(
        "{:<20} {} ({}%)\n\n",
        "Active injuries", summary.active_injuries, summary.injury_percentage
    ));

    output.push_str(&format_header("Availability", false, display));
    for status in AvailabilityStatus::all() {
        let count = summary.counts.get(status);
        output.push_str(&format!(
            "{:<20} {:>3}  {:>3}%\n",
            status.name(),
            count,
            percentage(count, summary.total)
        ));
    }

    if summary.squads.is_empty() {
        return output;
    }

    output.push('\n');
    output.push_str(&format_header("By Squad", false, display));
    output.push_str(&format!(
        "{:<squad_width$}{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}\n",
        "Squad",
        "Total",
        "Avail",
        "Doubt",
        "Out",
        "Injury",
        squad_width = SQUAD_COL_WIDTH,
        w = COUNT_COL_WIDTH,
    ));
    for squad in &summary.squads {
        let out = squad.counts.injured + squad.counts.unavailable;
        output.push_str(&format!(
            "{}{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}\n",
            fit_width(&squad.squad_name, SQUAD_COL_WIDTH, &display.box_chars.ellipsis),
            squad.counts.total(),
            squad.counts.available,
            squad.counts.doubtful,
            out,
            squad.active_injuries,
            w = COUNT_COL_WIDTH,
        ));
    }
    output
}

pub fn run(repository: &dyn AthleteRepository, config: &Config) -> Result<()> {
    let summary = RosterSummary::from_athletes(&repository.list_athletes());
    print!("{}", format_summary(&summary, &config.display()));
    Ok(())
}
