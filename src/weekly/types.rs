//! One week's output.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{Area, Group, Tier};

/// Areas handed to each group in one week.
///
/// Every roster group has an entry, possibly empty. Within a group the
/// areas keep the order in which they were assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeeklyAssignment {
    areas: BTreeMap<Group, Vec<Area>>,
}

impl WeeklyAssignment {
    pub(crate) fn empty() -> Self {
        Self {
            areas: Group::ALL.into_iter().map(|g| (g, Vec::new())).collect(),
        }
    }

    pub(crate) fn push(&mut self, group: Group, area: Area) {
        self.areas.entry(group).or_default().push(area);
    }

    /// Areas assigned to `group`, in assignment order.
    pub fn areas(&self, group: Group) -> &[Area] {
        self.areas.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of areas assigned to `group`.
    pub fn count(&self, group: Group) -> usize {
        self.areas(group).len()
    }

    /// `(group, areas)` in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (Group, &[Area])> {
        self.areas.iter().map(|(g, a)| (*g, a.as_slice()))
    }

    /// Total number of areas handed out this week.
    pub fn total_assigned(&self) -> usize {
        self.areas.values().map(Vec::len).sum()
    }

    /// Groups holding at least one area of `tier`.
    pub fn groups_with_tier(&self, tier: Tier) -> BTreeSet<Group> {
        self.iter()
            .filter(|(_, areas)| areas.iter().any(|a| a.tier == tier))
            .map(|(g, _)| g)
            .collect()
    }

    /// Comma-joined area names for `group`; empty when it has none.
    pub fn joined(&self, group: Group) -> String {
        self.areas(group)
            .iter()
            .map(|a| a.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Groups that received a `Highest`-tier area in a week.
///
/// Passed to the following week, where those groups are served last for
/// `Highest` areas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighestSet(BTreeSet<Group>);

impl HighestSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the `Highest` receivers of `assignment`.
    pub fn from_assignment(assignment: &WeeklyAssignment) -> Self {
        Self(assignment.groups_with_tier(Tier::Highest))
    }

    pub fn contains(&self, group: Group) -> bool {
        self.0.contains(&group)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Members in roster order.
    pub fn iter(&self) -> impl Iterator<Item = Group> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Group> for HighestSet {
    fn from_iter<I: IntoIterator<Item = Group>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GENERAL_AREAS, HIGHEST_AREAS, HIGH_AREAS};

    #[test]
    fn test_empty_has_every_group() {
        let week = WeeklyAssignment::empty();
        assert_eq!(week.iter().count(), Group::ALL.len());
        assert_eq!(week.total_assigned(), 0);
        assert_eq!(week.joined(Group::Unit2), "");
    }

    #[test]
    fn test_joined_keeps_insertion_order() {
        let mut week = WeeklyAssignment::empty();
        week.push(Group::Unit5, HIGH_AREAS[1]);
        week.push(Group::Unit5, GENERAL_AREAS[0]);
        assert_eq!(week.joined(Group::Unit5), "3F shower room, 1F laundry room");
        assert_eq!(week.count(Group::Unit5), 2);
    }

    #[test]
    fn test_highest_set_from_assignment() {
        let mut week = WeeklyAssignment::empty();
        week.push(Group::Unit3, GENERAL_AREAS[2]);
        week.push(Group::Unit3, HIGHEST_AREAS[0]);
        week.push(Group::Unit8, HIGH_AREAS[0]);
        let set = HighestSet::from_assignment(&week);
        assert!(set.contains(Group::Unit3));
        assert!(!set.contains(Group::Unit8));
        assert_eq!(set.len(), 1);
    }
}
