//! Position-group taxonomy
//!
//! The taxonomy is configuration, not data: an ordered list of display groups,
//! each owning a set of raw positions. It is validated once when built, so the
//! projector never meets an ambiguous or empty mapping.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Label of the bucket collecting positions no group claims
pub const DEFAULT_UNMAPPED_LABEL: &str = "Other";

/// One configured group, as written in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionGroup {
    pub label: String,
    pub positions: Vec<String>,
}

impl PositionGroup {
    pub fn new(label: &str, positions: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            positions: positions.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// The default ladder: Goalkeeper, Defence, Midfield, Attack
pub fn default_position_groups() -> Vec<PositionGroup> {
    vec![
        PositionGroup::new("Goalkeeper", &["Goalkeeper"]),
        PositionGroup::new("Defence", &["Defender", "Center Back", "Full Back"]),
        PositionGroup::new("Midfield", &["Midfielder", "Defensive Mid", "Attacking Mid"]),
        PositionGroup::new("Attack", &["Forward", "Striker", "Winger"]),
    ]
}

/// Validated, ordered position → group mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTaxonomy {
    groups: Vec<PositionGroup>,
    index: HashMap<String, usize>,
    unmapped_label: String,
}

impl GroupTaxonomy {
    /// Validate `groups` and build the lookup index
    ///
    /// Rejects an empty taxonomy, blank or duplicate labels, groups without
    /// positions, a position claimed by two groups, and an unmapped label that
    /// collides with a group label.
    pub fn new(groups: Vec<PositionGroup>, unmapped_label: &str) -> Result<Self> {
        if groups.is_empty() {
            return Err(RosterError::EmptyTaxonomy);
        }

        let mut index: HashMap<String, usize> = HashMap::new();
        for (i, group) in groups.iter().enumerate() {
            if group.label.trim().is_empty() {
                return Err(RosterError::BlankGroupLabel(i));
            }
            if groups[..i].iter().any(|g| g.label == group.label) {
                return Err(RosterError::DuplicateGroup(group.label.clone()));
            }
            if group.positions.is_empty() {
                return Err(RosterError::EmptyGroup(group.label.clone()));
            }
            for position in &group.positions {
                match index.get(position) {
                    // Listing a position twice in the same group is harmless
                    Some(&owner) if owner == i => {}
                    Some(&owner) => {
                        return Err(RosterError::AmbiguousPosition {
                            position: position.clone(),
                            first: groups[owner].label.clone(),
                            second: group.label.clone(),
                        });
                    }
                    None => {
                        index.insert(position.clone(), i);
                    }
                }
            }
        }

        let unmapped_label = if unmapped_label.trim().is_empty() {
            DEFAULT_UNMAPPED_LABEL
        } else {
            unmapped_label
        };
        if groups.iter().any(|g| g.label == unmapped_label) {
            return Err(RosterError::UnmappedLabelCollision(unmapped_label.to_string()));
        }

        Ok(Self {
            groups,
            index,
            unmapped_label: unmapped_label.to_string(),
        })
    }

    /// Group labels in display order, excluding the unmapped bucket
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.label.as_str())
    }

    pub fn groups(&self) -> &[PositionGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn unmapped_label(&self) -> &str {
        &self.unmapped_label
    }

    /// Index of the group owning `position`, or `None` when unmapped
    pub fn group_of(&self, position: &str) -> Option<usize> {
        self.index.get(position).copied()
    }
}

impl Default for GroupTaxonomy {
    fn default() -> Self {
        Self {
            index: default_position_groups()
                .iter()
                .enumerate()
                .flat_map(|(i, g)| g.positions.iter().map(move |p| (p.clone(), i)))
                .collect(),
            groups: default_position_groups(),
            unmapped_label: DEFAULT_UNMAPPED_LABEL.to_string(),
        }
    }
}
