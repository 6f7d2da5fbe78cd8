pub mod facets;
pub mod injuries;
pub mod list;
pub mod summary;

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::availability::AvailabilityStatus;
use crate::data_provider::InMemoryRepository;
use crate::injuries::InjuryInsights;
use crate::filter::{Selector, ALL};

/// Load the roster from `data`, or the bundled dataset when no file is given
pub fn load_repository(data: Option<&Path>) -> Result<InMemoryRepository> {
    match data {
        Some(path) => InMemoryRepository::from_path(path)
            .with_context(|| format!("Failed to load roster from {}", path.display())),
        None => InMemoryRepository::bundled().context("Failed to load bundled roster"),
    }
}

/// Load injury datasets from `data`, or the bundled ones when no file is given
pub fn load_injuries(data: Option<&Path>) -> Result<InjuryInsights> {
    match data {
        Some(path) => InjuryInsights::from_path(path)
            .with_context(|| format!("Failed to load injury data from {}", path.display())),
        None => InjuryInsights::bundled().context("Failed to load bundled injury data"),
    }
}

/// Parse an availability facet argument, where "all" means no constraint
pub fn parse_availability(value: &str) -> Result<Selector<AvailabilityStatus>> {
    if value.eq_ignore_ascii_case(ALL) {
        return Ok(Selector::All);
    }
    match AvailabilityStatus::from_label(value) {
        Some(status) => Ok(Selector::Only(status)),
        None => bail!(
            "Invalid availability '{}'. Use all, available, injured, doubtful or unavailable",
            value
        ),
    }
}
