/// Fixture data for testing and development
///
/// This module provides consistent, deterministic data used for:
/// 1. The bundled datasets served when no data file is configured
/// 2. Unit and integration tests that need predictable athletes
/// 3. Benchmarks that need a roster of arbitrary size
use crate::availability::AvailabilityStatus;
use crate::types::Athlete;

/// Mock roster shipped with the binary
pub const BUNDLED_ATHLETES_JSON: &str = include_str!("../data/athletes.json");

/// Injury analytics datasets shipped with the binary
pub const BUNDLED_INJURIES_JSON: &str = include_str!("../data/injuries.json");

/// The two-athlete roster used throughout the filtering scenarios
pub fn scenario_athletes() -> Vec<Athlete> {
    vec![
        Athlete::new(1u64, "Kyler", "Murray", "Forward", "First Team")
            .with_availability(AvailabilityStatus::Available),
        Athlete::new(2u64, "Budda", "Baker", "Defender", "First Team")
            .with_availability(AvailabilityStatus::Unavailable)
            .with_injury("Knee sprain"),
    ]
}

/// Build a roster of `count` athletes cycling through positions, squads and statuses
pub fn generated_athletes(count: usize) -> Vec<Athlete> {
    const POSITIONS: [&str; 10] = [
        "Goalkeeper",
        "Defender",
        "Center Back",
        "Full Back",
        "Midfielder",
        "Defensive Mid",
        "Attacking Mid",
        "Forward",
        "Striker",
        "Winger",
    ];
    const SQUADS: [&str; 3] = ["First Team", "Reserve Team", "Academy U21"];
    let statuses = AvailabilityStatus::all();

    (0..count)
        .map(|i| {
            let athlete = Athlete::new(
                i as u64 + 1,
                &format!("Player{}", i),
                &format!("Surname{}", i % 97),
                POSITIONS[i % POSITIONS.len()],
                SQUADS[i % SQUADS.len()],
            )
            .with_availability(statuses[i % statuses.len()]);
            if i % 7 == 0 {
                athlete.with_injury("Hamstring strain")
            } else {
                athlete
            }
        })
        .collect()
}
