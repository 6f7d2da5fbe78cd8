//! Roster overview figures: availability counts and injury rates

use serde::Serialize;

use crate::availability::AvailabilityStatus;
use crate::types::Athlete;

/// Availability counts for a set of athletes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub available: usize,
    pub injured: usize,
    pub doubtful: usize,
    pub unavailable: usize,
    pub unknown: usize,
}

impl StatusCounts {
    fn record(&mut self, status: AvailabilityStatus) {
        match status {
            AvailabilityStatus::Available => self.available += 1,
            AvailabilityStatus::Injured => self.injured += 1,
            AvailabilityStatus::Doubtful => self.doubtful += 1,
            AvailabilityStatus::Unavailable => self.unavailable += 1,
            AvailabilityStatus::Unknown => self.unknown += 1,
        }
    }

    pub fn get(&self, status: AvailabilityStatus) -> usize {
        match status {
            AvailabilityStatus::Available => self.available,
            AvailabilityStatus::Injured => self.injured,
            AvailabilityStatus::Doubtful => self.doubtful,
            AvailabilityStatus::Unavailable => self.unavailable,
            AvailabilityStatus::Unknown => self.unknown,
        }
    }

    pub fn total(&self) -> usize {
        self.available + self.injured + self.doubtful + self.unavailable + self.unknown
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SquadSummary {
    pub squad_name: String,
    pub counts: StatusCounts,
    pub active_injuries: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterSummary {
    pub total: usize,
    pub counts: StatusCounts,
    /// Athletes whose injury status is not "Healthy"
    pub active_injuries: usize,
    /// Rounded share of athletes with an active injury
    pub injury_percentage: u32,
    /// Rounded share of athletes that are Available
    pub fit_to_play_index: u32,
    /// Per-squad breakdown in first-seen order
    pub squads: Vec<SquadSummary>,
}

impl RosterSummary {
    pub fn from_athletes(athletes: &[Athlete]) -> Self {
        let mut counts = StatusCounts::default();
        let mut active_injuries = 0;
        let mut squads: Vec<SquadSummary> = Vec::new();

        for athlete in athletes {
            counts.record(athlete.availability_status);
            let injured = athlete.has_active_injury();
            if injured {
                active_injuries += 1;
            }

            let squad = match squads
                .iter_mut()
                .position(|s| s.squad_name == athlete.squad_name)
            {
                Some(i) => &mut squads[i],
                None => {
                    squads.push(SquadSummary {
                        squad_name: athlete.squad_name.clone(),
                        counts: StatusCounts::default(),
                        active_injuries: 0,
                    });
                    let last = squads.len() - 1;
                    &mut squads[last]
                }
            };
            squad.counts.record(athlete.availability_status);
            if injured {
                squad.active_injuries += 1;
            }
        }

        Self {
            total: athletes.len(),
            counts,
            active_injuries,
            injury_percentage: percentage(active_injuries, athletes.len()),
            fit_to_play_index: percentage(counts.available, athletes.len()),
            squads,
        }
    }
}

/// `part / whole` as a rounded percentage, 0 when `whole` is 0
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 * 100.0) / whole as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{scenario_athletes, BUNDLED_ATHLETES_JSON};

    #[test]
    fn test_scenario_summary() {
        let summary = RosterSummary::from_athletes(&scenario_athletes());
        assert_eq!(summary.total, 2);
        assert_eq!(summary.counts.available, 1);
        assert_eq!(summary.counts.unavailable, 1);
        assert_eq!(summary.active_injuries, 1);
        assert_eq!(summary.injury_percentage, 50);
        assert_eq!(summary.fit_to_play_index, 50);
        assert_eq!(summary.squads.len(), 1);
        assert_eq!(summary.squads[0].squad_name, "First Team");
        assert_eq!(summary.squads[0].active_injuries, 1);
    }

    #[test]
    fn test_empty_roster_has_zero_rates() {
        let summary = RosterSummary::from_athletes(&[]);
        assert_eq!(summary, RosterSummary::default());
        assert_eq!(summary.fit_to_play_index, 0);
    }

    #[test]
    fn test_bundled_dataset_summary() {
        let athletes: Vec<Athlete> = serde_json::from_str(BUNDLED_ATHLETES_JSON).unwrap();
        let summary = RosterSummary::from_athletes(&athletes);
        assert_eq!(summary.total, 24);
        assert_eq!(summary.counts.available, 15);
        assert_eq!(summary.counts.injured, 3);
        assert_eq!(summary.counts.doubtful, 3);
        assert_eq!(summary.counts.unavailable, 2);
        assert_eq!(summary.counts.unknown, 1);
        assert_eq!(summary.counts.total(), 24);
        assert_eq!(summary.active_injuries, 8);
        assert_eq!(summary.injury_percentage, 33);
        // 15 of 24 is 62.5%, rounded away from zero
        assert_eq!(summary.fit_to_play_index, 63);

        let names: Vec<_> = summary.squads.iter().map(|s| s.squad_name.as_str()).collect();
        assert_eq!(names, vec!["First Team", "Reserve Team", "Academy U21"]);
        let squad_total: usize = summary.squads.iter().map(|s| s.counts.total()).sum();
        assert_eq!(squad_total, 24);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(4, 4), 100);
    }
}
