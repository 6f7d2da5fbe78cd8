//! Availability status vocabulary
//!
//! Datasets spell statuses several ways ("Out", "questionable", "INJURED").
//! Every spelling is folded onto one of the canonical variants through a
//! static lookup table; anything else becomes `Unknown`.

use phf::phf_map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AvailabilityStatus {
    Available,
    Injured,
    /// Also reported as "Questionable"
    Doubtful,
    /// Also reported as "Out"
    Unavailable,
    /// Missing or unrecognized status
    #[default]
    Unknown,
}

/// Lower-cased spellings accepted in datasets
static STATUS_ALIASES: phf::Map<&'static str, AvailabilityStatus> = phf_map! {
    "available" => AvailabilityStatus::Available,
    "fit" => AvailabilityStatus::Available,
    "injured" => AvailabilityStatus::Injured,
    "doubtful" => AvailabilityStatus::Doubtful,
    "questionable" => AvailabilityStatus::Doubtful,
    "unavailable" => AvailabilityStatus::Unavailable,
    "out" => AvailabilityStatus::Unavailable,
};

/// Display tone of a status, mapped to theme colors by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
    Neutral,
}

impl AvailabilityStatus {
    /// Parse a status label, case-insensitively
    ///
    /// Returns `None` when the label is not a known spelling.
    pub fn from_label(label: &str) -> Option<Self> {
        STATUS_ALIASES
            .get(label.trim().to_lowercase().as_str())
            .copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Injured => "Injured",
            Self::Doubtful => "Doubtful",
            Self::Unavailable => "Unavailable",
            Self::Unknown => "Unknown",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Available => Tone::Success,
            Self::Injured | Self::Unavailable => Tone::Error,
            Self::Doubtful => Tone::Warning,
            Self::Unknown => Tone::Neutral,
        }
    }

    pub fn all() -> [Self; 5] {
        [
            Self::Available,
            Self::Injured,
            Self::Doubtful,
            Self::Unavailable,
            Self::Unknown,
        ]
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for AvailabilityStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Absent, null and unrecognized values all land on `Unknown`
impl<'de> Deserialize<'de> for AvailabilityStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label: Option<String> = Option::deserialize(deserializer)?;
        Ok(label
            .as_deref()
            .and_then(AvailabilityStatus::from_label)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_canonical_names() {
        assert_eq!(AvailabilityStatus::from_label("Available"), Some(AvailabilityStatus::Available));
        assert_eq!(AvailabilityStatus::from_label("Injured"), Some(AvailabilityStatus::Injured));
        assert_eq!(AvailabilityStatus::from_label("Doubtful"), Some(AvailabilityStatus::Doubtful));
        assert_eq!(AvailabilityStatus::from_label("Unavailable"), Some(AvailabilityStatus::Unavailable));
    }

    #[test]
    fn test_from_label_aliases_and_case() {
        assert_eq!(AvailabilityStatus::from_label("questionable"), Some(AvailabilityStatus::Doubtful));
        assert_eq!(AvailabilityStatus::from_label("OUT"), Some(AvailabilityStatus::Unavailable));
        assert_eq!(AvailabilityStatus::from_label("  available "), Some(AvailabilityStatus::Available));
        assert_eq!(AvailabilityStatus::from_label("suspended"), None);
    }

    #[test]
    fn test_tones() {
        assert_eq!(AvailabilityStatus::Available.tone(), Tone::Success);
        assert_eq!(AvailabilityStatus::Injured.tone(), Tone::Error);
        assert_eq!(AvailabilityStatus::Doubtful.tone(), Tone::Warning);
        assert_eq!(AvailabilityStatus::Unavailable.tone(), Tone::Error);
        assert_eq!(AvailabilityStatus::Unknown.tone(), Tone::Neutral);
    }

    #[test]
    fn test_deserialize_missing_and_unknown() {
        let status: AvailabilityStatus = serde_json::from_str("null").unwrap();
        assert_eq!(status, AvailabilityStatus::Unknown);

        let status: AvailabilityStatus = serde_json::from_str("\"on loan\"").unwrap();
        assert_eq!(status, AvailabilityStatus::Unknown);

        let status: AvailabilityStatus = serde_json::from_str("\"Out\"").unwrap();
        assert_eq!(status, AvailabilityStatus::Unavailable);
    }

    #[test]
    fn test_serialize_uses_canonical_name() {
        let json = serde_json::to_string(&AvailabilityStatus::Doubtful).unwrap();
        assert_eq!(json, "\"Doubtful\"");
    }
}
