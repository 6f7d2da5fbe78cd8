/// Shared types used across the application
///
/// This module contains the athlete record shared between the library
/// (filtering, projection, commands, tui) and the binary (main.rs).
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::availability::AvailabilityStatus;

/// Injury status value meaning "no active injury"
pub const HEALTHY: &str = "Healthy";

/// Opaque athlete identifier
///
/// Datasets use either integers or strings; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AthleteId(String);

impl AthleteId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AthleteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AthleteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for AthleteId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for AthleteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            // Any JSON number, unsigned and fractional ids included
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => AthleteId(n.to_string()),
            RawId::Text(s) => AthleteId(s),
        })
    }
}

/// A roster member
///
/// Field names follow the dataset exactly. Numeric attributes are for display
/// only and never take part in filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: AthleteId,
    pub firstname: String,
    pub lastname: String,
    pub position: String,
    pub squad_name: String,
    #[serde(default)]
    pub availability_status: AvailabilityStatus,
    #[serde(default = "healthy", deserialize_with = "deserialize_injury_status")]
    pub injury_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_score: Option<f64>,
}

fn healthy() -> String {
    HEALTHY.to_string()
}

fn deserialize_injury_status<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let status: Option<String> = Option::deserialize(deserializer)?;
    Ok(match status {
        Some(s) if !s.trim().is_empty() => s,
        _ => healthy(),
    })
}

impl Athlete {
    /// Build an athlete with the required fields; status defaults to Unknown/Healthy
    pub fn new(
        id: impl Into<AthleteId>,
        firstname: &str,
        lastname: &str,
        position: &str,
        squad_name: &str,
    ) -> Self {
        Self {
            id: id.into(),
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
            position: position.to_string(),
            squad_name: squad_name.to_string(),
            availability_status: AvailabilityStatus::Unknown,
            injury_status: healthy(),
            position_group: None,
            age: None,
            height: None,
            weight: None,
            performance_score: None,
        }
    }

    pub fn with_availability(mut self, status: AvailabilityStatus) -> Self {
        self.availability_status = status;
        self
    }

    pub fn with_injury(mut self, injury: &str) -> Self {
        self.injury_status = injury.to_string();
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    pub fn has_active_injury(&self) -> bool {
        self.injury_status != HEALTHY
    }
}
