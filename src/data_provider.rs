/// Trait for providing roster data, abstracting over the in-memory dataset and
/// any future remote source
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Result, RosterError};
use crate::types::Athlete;

/// Read-only access to the athlete collection and its facets
///
/// Facet lists are derived from `list_athletes` in first-seen order, so an
/// implementation only has to supply the collection itself.
pub trait AthleteRepository: Send + Sync {
    /// All athletes, in source order
    fn list_athletes(&self) -> Arc<[Athlete]>;

    /// Distinct squad names present in the collection
    fn list_squads(&self) -> Vec<String> {
        distinct(self.list_athletes().iter().map(|a| a.squad_name.as_str()))
    }

    /// Distinct positions present in the collection
    fn list_positions(&self) -> Vec<String> {
        distinct(self.list_athletes().iter().map(|a| a.position.as_str()))
    }

    /// Distinct record-level position groups present in the collection
    fn list_position_groups(&self) -> Vec<String> {
        distinct(
            self.list_athletes()
                .iter()
                .filter_map(|a| a.position_group.as_deref()),
        )
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Repository backed by a validated, immutable in-memory collection
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    athletes: Arc<[Athlete]>,
}

impl InMemoryRepository {
    /// Build a repository, validating names and id uniqueness
    pub fn new(athletes: Vec<Athlete>) -> Result<Self> {
        validate(&athletes)?;
        debug!("Roster repository holds {} athletes", athletes.len());
        Ok(Self {
            athletes: athletes.into(),
        })
    }

    /// Parse a JSON array of athlete records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let athletes: Vec<Athlete> = serde_json::from_str(json)?;
        Self::new(athletes)
    }

    /// Load a JSON dataset from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RosterError::DatasetIo {
            path: path.display().to_string(),
            source,
        })?;
        let repo = Self::from_json_str(&content)?;
        info!(
            "Loaded {} athletes from {}",
            repo.athletes.len(),
            path.display()
        );
        Ok(repo)
    }

    /// The dataset bundled with the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(crate::fixtures::BUNDLED_ATHLETES_JSON)
    }

    /// Load from `path` when given, otherwise fall back to the bundled dataset
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => {
                info!("Using bundled athlete dataset");
                Self::bundled()
            }
        }
    }
}

impl AthleteRepository for InMemoryRepository {
    fn list_athletes(&self) -> Arc<[Athlete]> {
        Arc::clone(&self.athletes)
    }
}

fn validate(athletes: &[Athlete]) -> Result<()> {
    let mut ids = HashSet::new();
    for athlete in athletes {
        if athlete.firstname.trim().is_empty() {
            return Err(RosterError::EmptyName {
                id: athlete.id.clone(),
                field: "firstname",
            });
        }
        if athlete.lastname.trim().is_empty() {
            return Err(RosterError::EmptyName {
                id: athlete.id.clone(),
                field: "lastname",
            });
        }
        if !ids.insert(&athlete.id) {
            return Err(RosterError::DuplicateAthleteId(athlete.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::scenario_athletes;

    #[test]
    fn test_list_athletes_preserves_source_order() {
        let repo = InMemoryRepository::new(scenario_athletes()).unwrap();
        let ids: Vec<_> = repo.list_athletes().iter().map(|a| a.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_facets_are_distinct_in_first_seen_order() {
        let athletes = vec![
            Athlete::new(1u64, "A", "One", "Forward", "First Team"),
            Athlete::new(2u64, "B", "Two", "Defender", "Academy U21"),
            Athlete::new(3u64, "C", "Three", "Forward", "First Team"),
        ];
        let repo = InMemoryRepository::new(athletes).unwrap();
        assert_eq!(repo.list_squads(), vec!["First Team", "Academy U21"]);
        assert_eq!(repo.list_positions(), vec!["Forward", "Defender"]);
        assert!(repo.list_position_groups().is_empty());
    }

    #[test]
    fn test_empty_repository_is_valid() {
        let repo = InMemoryRepository::new(Vec::new()).unwrap();
        assert!(repo.list_athletes().is_empty());
        assert!(repo.list_squads().is_empty());
        assert!(repo.list_positions().is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let athletes = vec![
            Athlete::new(1u64, "A", "One", "Forward", "First Team"),
            Athlete::new(1u64, "B", "Two", "Defender", "First Team"),
        ];
        let err = InMemoryRepository::new(athletes).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateAthleteId(_)));
    }

    #[test]
    fn test_blank_names_rejected() {
        let athletes = vec![Athlete::new(1u64, "  ", "One", "Forward", "First Team")];
        let err = InMemoryRepository::new(athletes).unwrap_err();
        assert!(matches!(err, RosterError::EmptyName { field: "firstname", .. }));
    }

    #[test]
    fn test_from_json_str_reports_malformed_data() {
        let err = InMemoryRepository::from_json_str("{\"not\": \"an array\"}").unwrap_err();
        assert!(matches!(err, RosterError::DatasetFormat(_)));
    }

    #[test]
    fn test_from_path_reports_missing_file() {
        let err = InMemoryRepository::from_path(Path::new("/nonexistent/athletes.json")).unwrap_err();
        assert!(matches!(err, RosterError::DatasetIo { .. }));
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let repo = InMemoryRepository::bundled().unwrap();
        assert!(!repo.list_athletes().is_empty());
        assert!(repo.list_squads().contains(&"First Team".to_string()));
        assert!(!repo.list_position_groups().is_empty());
    }
}
