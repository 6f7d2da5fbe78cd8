//! Roster search and facet filtering
//!
//! Filtering is a stable pass over the collection: output order is input
//! order, and every output record is a copy of an input record.

use crate::availability::AvailabilityStatus;
use crate::types::Athlete;

/// Availability sentinel accepted on the command line
///
/// Squad and position flags have no sentinel: an omitted flag means every
/// value, so a squad literally named "All" stays selectable.
pub const ALL: &str = "all";

/// A single-choice facet: everything, or exactly one value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selector<T> {
    /// Exact, case-sensitive membership test
    pub fn admits<Q>(&self, value: &Q) -> bool
    where
        Q: ?Sized,
        T: PartialEq<Q>,
    {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Selector<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

/// Current search text and facet selections
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub query: String,
    pub squad: Selector<String>,
    pub position: Selector<String>,
    pub availability: Selector<AvailabilityStatus>,
}

impl FilterCriteria {
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty()
            && self.squad.is_all()
            && self.position.is_all()
            && self.availability.is_all()
    }

    /// Compile the criteria for repeated matching
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher {
            criteria: self,
            needle: self.query.to_lowercase(),
        }
    }
}

/// Criteria with the search text lower-cased once
pub struct Matcher<'a> {
    criteria: &'a FilterCriteria,
    needle: String,
}

impl Matcher<'_> {
    pub fn matches(&self, athlete: &Athlete) -> bool {
        self.criteria.squad.admits(athlete.squad_name.as_str())
            && self.criteria.position.admits(athlete.position.as_str())
            && self.criteria.availability.admits(&athlete.availability_status)
            && self.matches_query(athlete)
    }

    fn matches_query(&self, athlete: &Athlete) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [&athlete.firstname, &athlete.lastname, &athlete.position]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Filter `athletes` by `criteria`, preserving order
pub fn filter_athletes(athletes: &[Athlete], criteria: &FilterCriteria) -> Vec<Athlete> {
    let matcher = criteria.matcher();
    athletes
        .iter()
        .filter(|athlete| matcher.matches(athlete))
        .cloned()
        .collect()
}
