use thiserror::Error;

use crate::injuries::InjuryMetric;
use crate::types::AthleteId;

/// Errors raised while loading the roster, the config file or validating view
/// configuration
///
/// Everything here is detected once, at load or mount time. Empty results and
/// out-of-range pages are never errors.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to read dataset {path}")]
    DatasetIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed athlete dataset")]
    DatasetFormat(#[from] serde_json::Error),

    #[error("Athlete {id} has an empty {field}")]
    EmptyName { id: AthleteId, field: &'static str },

    #[error("Duplicate athlete id {0}")]
    DuplicateAthleteId(AthleteId),

    #[error("Position group taxonomy is empty")]
    EmptyTaxonomy,

    #[error("Position group at index {0} has a blank label")]
    BlankGroupLabel(usize),

    #[error("Position group '{0}' has no positions")]
    EmptyGroup(String),

    #[error("Position group '{0}' is defined more than once")]
    DuplicateGroup(String),

    #[error("Position '{position}' is mapped to both '{first}' and '{second}'")]
    AmbiguousPosition {
        position: String,
        first: String,
        second: String,
    },

    #[error("Unmapped bucket label '{0}' collides with a position group")]
    UnmappedLabelCollision(String),

    #[error("Page size must be a positive integer")]
    InvalidPageSize,

    #[error("Malformed injury dataset")]
    InjuryFormat(#[source] serde_json::Error),

    #[error("Injury metric '{0}' is defined more than once")]
    DuplicateInjuryMetric(InjuryMetric),

    #[error("Injury metric '{0}' has a row with a blank season")]
    BlankSeason(InjuryMetric),

    #[error("Failed to read config file {path}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}")]
    ConfigFormat {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Result type for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
