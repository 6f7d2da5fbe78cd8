//! View state holder for the availability view
//!
//! Owns the current search/facet selections, view mode and pagination, and
//! keeps the projection for those selections. Every mutation recomputes the
//! projection from scratch; filter changes also rewind to the first page.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::availability::AvailabilityStatus;
use crate::data_provider::AthleteRepository;
use crate::error::{Result, RosterError};
use crate::filter::{filter_athletes, FilterCriteria, Selector};
use crate::projector::{project, GroupedPage};
use crate::taxonomy::GroupTaxonomy;
use crate::types::Athlete;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Which projection the presentation layer asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Flat filtered list, unpaginated
    #[default]
    Grid,
    /// Grouped by position group, paginated per group
    Ladder,
}

impl ViewMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::Ladder => "Ladder",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Grid => Self::Ladder,
            Self::Ladder => Self::Grid,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "ladder" | "grouped" => Ok(Self::Ladder),
            other => Err(format!("Unknown view mode '{}' (expected grid or ladder)", other)),
        }
    }
}

/// Read-only snapshot handed to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Grid(Vec<Athlete>),
    Ladder(GroupedPage),
}

impl Projection {
    /// True when nothing matched the current filters
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Grid(athletes) => athletes.is_empty(),
            Self::Ladder(page) => page.total() == 0,
        }
    }
}

/// Initial view settings, usually taken from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    pub view_mode: ViewMode,
    pub page_size: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Grid,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewState {
    athletes: Arc<[Athlete]>,
    taxonomy: Arc<GroupTaxonomy>,
    squads: Vec<String>,
    positions: Vec<String>,
    criteria: FilterCriteria,
    view_mode: ViewMode,
    page: usize,
    page_size: usize,
    filtered_count: usize,
    projection: Projection,
}

impl ViewState {
    /// Load the collection from `repository` and compute the initial projection
    pub fn mount(
        repository: &dyn AthleteRepository,
        taxonomy: GroupTaxonomy,
        settings: ViewSettings,
    ) -> Result<Self> {
        if settings.page_size == 0 {
            return Err(RosterError::InvalidPageSize);
        }
        let mut state = Self {
            athletes: repository.list_athletes(),
            taxonomy: Arc::new(taxonomy),
            squads: repository.list_squads(),
            positions: repository.list_positions(),
            criteria: FilterCriteria::default(),
            view_mode: settings.view_mode,
            page: 0,
            page_size: settings.page_size,
            filtered_count: 0,
            projection: Projection::Grid(Vec::new()),
        };
        state.recompute();
        Ok(state)
    }

    // === Reads ===

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Squad facet options, in first-seen order
    pub fn squads(&self) -> &[String] {
        &self.squads
    }

    /// Position facet options, in first-seen order
    pub fn positions(&self) -> &[String] {
        &self.positions
    }

    pub fn taxonomy(&self) -> &GroupTaxonomy {
        &self.taxonomy
    }

    pub fn athletes(&self) -> &[Athlete] {
        &self.athletes
    }

    /// Matches for the current filters, before grouping or pagination
    pub fn filtered_count(&self) -> usize {
        self.filtered_count
    }

    /// Pages available in ladder mode; grid mode is always a single page
    pub fn page_count(&self) -> usize {
        match &self.projection {
            Projection::Grid(_) => 1,
            Projection::Ladder(page) => page.page_count(),
        }
    }

    // === Transitions ===

    pub fn set_query(&mut self, query: &str) {
        self.criteria.query = query.to_string();
        self.filters_changed();
    }

    pub fn set_squad(&mut self, squad: Selector<String>) {
        self.criteria.squad = squad;
        self.filters_changed();
    }

    pub fn set_position(&mut self, position: Selector<String>) {
        self.criteria.position = position;
        self.filters_changed();
    }

    pub fn set_availability(&mut self, availability: Selector<AvailabilityStatus>) {
        self.criteria.availability = availability;
        self.filters_changed();
    }

    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.filters_changed();
    }

    /// Any page index is accepted; pages past the end are empty
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.recompute();
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(RosterError::InvalidPageSize);
        }
        self.page_size = page_size;
        self.page = 0;
        self.recompute();
        Ok(())
    }

    /// Switch projection; filters and pagination are kept as they are
    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
        self.recompute();
    }

    fn filters_changed(&mut self) {
        self.page = 0;
        self.recompute();
    }

    fn recompute(&mut self) {
        let filtered = filter_athletes(&self.athletes, &self.criteria);
        self.filtered_count = filtered.len();
        self.projection = match self.view_mode {
            ViewMode::Grid => Projection::Grid(filtered),
            ViewMode::Ladder => Projection::Ladder(project(
                &filtered,
                &self.taxonomy,
                self.page,
                self.page_size,
            )),
        };
        debug!(
            "VIEW: recomputed {} projection: {} of {} athletes match, page {} (size {})",
            self.view_mode,
            self.filtered_count,
            self.athletes.len(),
            self.page,
            self.page_size
        );
    }
}
