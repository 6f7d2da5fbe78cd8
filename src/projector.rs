//! Grouping and per-group pagination
//!
//! Each group is paginated on its own: page `p` of size `s` shows athletes
//! `[p*s, p*s+s)` of every group, not a window over the flattened list.

use crate::taxonomy::GroupTaxonomy;
use crate::types::Athlete;

/// One group of the ladder view
#[derive(Debug, Clone, PartialEq)]
pub struct GroupPage {
    pub label: String,
    /// Matches in this group before pagination
    pub total: usize,
    /// The requested page of this group
    pub athletes: Vec<Athlete>,
    /// True for the bucket of positions no group claims
    pub unmapped: bool,
}

impl GroupPage {
    pub fn page_count(&self, page_size: usize) -> usize {
        page_count(self.total, page_size)
    }
}

/// Ladder projection: every configured group in taxonomy order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupedPage {
    pub groups: Vec<GroupPage>,
    pub page: usize,
    pub page_size: usize,
}

impl GroupedPage {
    /// Athletes shown on this page across all groups
    pub fn emitted(&self) -> usize {
        self.groups.iter().map(|g| g.athletes.len()).sum()
    }

    /// Matches across all groups before pagination
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.total).sum()
    }

    /// Pages needed to show the largest group, at least one
    pub fn page_count(&self) -> usize {
        self.groups
            .iter()
            .map(|g| g.page_count(self.page_size))
            .max()
            .unwrap_or(1)
            .max(1)
    }

    pub fn group(&self, label: &str) -> Option<&GroupPage> {
        self.groups.iter().find(|g| g.label == label)
    }
}

/// Number of pages of `page_size` needed for `total` items
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Slice window `[page*size, page*size+size)` clamped to `len`
///
/// Overflowing offsets produce an empty window.
fn page_window(len: usize, page: usize, page_size: usize) -> std::ops::Range<usize> {
    let start = match page.checked_mul(page_size) {
        Some(start) if start < len => start,
        _ => return len..len,
    };
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Group `athletes` by `taxonomy` and cut page `page` out of every group
///
/// Configured groups are always present, even when empty. Athletes whose
/// position no group claims land in a trailing unmapped bucket, which only
/// appears when it has members.
pub fn project(
    athletes: &[Athlete],
    taxonomy: &GroupTaxonomy,
    page: usize,
    page_size: usize,
) -> GroupedPage {
    let mut buckets: Vec<Vec<&Athlete>> = vec![Vec::new(); taxonomy.len()];
    let mut unmapped: Vec<&Athlete> = Vec::new();

    for athlete in athletes {
        match taxonomy.group_of(&athlete.position) {
            Some(i) => buckets[i].push(athlete),
            None => unmapped.push(athlete),
        }
    }

    let slice = |members: &[&Athlete]| -> Vec<Athlete> {
        members[page_window(members.len(), page, page_size)]
            .iter()
            .map(|a| (*a).clone())
            .collect()
    };

    let mut groups: Vec<GroupPage> = taxonomy
        .labels()
        .zip(&buckets)
        .map(|(label, members)| GroupPage {
            label: label.to_string(),
            total: members.len(),
            athletes: slice(members.as_slice()),
            unmapped: false,
        })
        .collect();

    if !unmapped.is_empty() {
        groups.push(GroupPage {
            label: taxonomy.unmapped_label().to_string(),
            total: unmapped.len(),
            athletes: slice(unmapped.as_slice()),
            unmapped: true,
        });
    }

    GroupedPage {
        groups,
        page,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{generated_athletes, scenario_athletes};
    use crate::taxonomy::PositionGroup;

    fn attack_defence() -> GroupTaxonomy {
        GroupTaxonomy::new(
            vec![
                PositionGroup::new("Attack", &["Forward"]),
                PositionGroup::new("Defence", &["Defender"]),
            ],
            "Other",
        )
        .unwrap()
    }

    fn labels_and_ids(page: &GroupedPage) -> Vec<(String, Vec<String>)> {
        page.groups
            .iter()
            .map(|g| {
                (
                    g.label.clone(),
                    g.athletes.iter().map(|a| a.id.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_scenario_one_per_group() {
        let page = project(&scenario_athletes(), &attack_defence(), 0, 1);
        assert_eq!(
            labels_and_ids(&page),
            vec![
                ("Attack".to_string(), vec!["1".to_string()]),
                ("Defence".to_string(), vec!["2".to_string()]),
            ]
        );
    }

    #[test]
    fn test_empty_groups_still_present() {
        let only_forward = vec![scenario_athletes().remove(0)];
        let page = project(&only_forward, &attack_defence(), 0, 5);
        assert_eq!(page.groups.len(), 2);
        assert_eq!(page.groups[1].label, "Defence");
        assert!(page.groups[1].athletes.is_empty());
        assert_eq!(page.groups[1].total, 0);
    }

    #[test]
    fn test_empty_input_keeps_taxonomy_layout() {
        let page = project(&[], &GroupTaxonomy::default(), 0, 10);
        let labels: Vec<_> = page.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Goalkeeper", "Defence", "Midfield", "Attack"]);
        assert_eq!(page.emitted(), 0);
        assert_eq!(page.page_count(), 1);
    }

    #[test]
    fn test_unmapped_positions_go_to_trailing_bucket() {
        let athletes = vec![
            Athlete::new(1u64, "A", "One", "Forward", "First Team"),
            Athlete::new(2u64, "B", "Two", "Utility", "First Team"),
        ];
        let page = project(&athletes, &attack_defence(), 0, 10);
        assert_eq!(page.groups.len(), 3);
        let other = page.groups.last().unwrap();
        assert_eq!(other.label, "Other");
        assert!(other.unmapped);
        assert_eq!(other.athletes[0].id.to_string(), "2");
    }

    #[test]
    fn test_pagination_is_per_group() {
        // 4 forwards and 2 defenders
        let athletes = vec![
            Athlete::new(1u64, "F", "1", "Forward", "First Team"),
            Athlete::new(2u64, "D", "1", "Defender", "First Team"),
            Athlete::new(3u64, "F", "2", "Forward", "First Team"),
            Athlete::new(4u64, "F", "3", "Forward", "First Team"),
            Athlete::new(5u64, "D", "2", "Defender", "First Team"),
            Athlete::new(6u64, "F", "4", "Forward", "First Team"),
        ];
        let taxonomy = attack_defence();

        let first = project(&athletes, &taxonomy, 0, 2);
        assert_eq!(
            labels_and_ids(&first),
            vec![
                ("Attack".to_string(), vec!["1".to_string(), "3".to_string()]),
                ("Defence".to_string(), vec!["2".to_string(), "5".to_string()]),
            ]
        );

        let second = project(&athletes, &taxonomy, 1, 2);
        assert_eq!(
            labels_and_ids(&second),
            vec![
                ("Attack".to_string(), vec!["4".to_string(), "6".to_string()]),
                ("Defence".to_string(), vec![]),
            ]
        );
        assert_eq!(second.group("Attack").unwrap().total, 4);
        assert_eq!(second.page_count(), 2);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let page = project(&scenario_athletes(), &attack_defence(), 50, 3);
        assert_eq!(page.groups.len(), 2);
        assert_eq!(page.emitted(), 0);
        assert_eq!(page.total(), 2);
    }

    #[test]
    fn test_overflowing_page_offset_is_empty() {
        let page = project(&scenario_athletes(), &attack_defence(), usize::MAX, usize::MAX);
        assert_eq!(page.emitted(), 0);
    }

    #[test]
    fn test_zero_page_size_emits_nothing() {
        let page = project(&scenario_athletes(), &attack_defence(), 0, 0);
        assert_eq!(page.emitted(), 0);
        assert_eq!(page.total(), 2);
    }

    #[test]
    fn test_emitted_bounded_by_groups_times_size() {
        let athletes = generated_athletes(300);
        let taxonomy = GroupTaxonomy::default();
        for page in 0..5 {
            for size in 1..8 {
                let projected = project(&athletes, &taxonomy, page, size);
                assert!(projected.emitted() <= projected.groups.len() * size);
                for group in &projected.groups {
                    assert!(group.athletes.len() <= size);
                }
            }
        }
    }

    #[test]
    fn test_group_order_follows_filter_order() {
        let athletes = generated_athletes(60);
        let page = project(&athletes, &GroupTaxonomy::default(), 0, 100);
        for group in &page.groups {
            let positions: Vec<usize> = group
                .athletes
                .iter()
                .map(|a| athletes.iter().position(|b| b.id == a.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_page_count_helper() {
        assert_eq!(page_count(0, 5), 0);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(6, 5), 2);
        assert_eq!(page_count(6, 0), 0);
    }
}
