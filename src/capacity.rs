//! Validated per-group headcounts.

use std::collections::HashMap;

use crate::catalog::{Group, GROUP_COUNT, MAX_CAPACITY};
use crate::error::RotationError;

/// Declared cleaning headcount for every group.
///
/// Always holds values in `0..=MAX_CAPACITY`; construction is the only
/// place capacities are checked. Groups never mentioned default to 0.
///
/// # Examples
///
/// ```
/// use duty_rotation::{Capacities, Group};
///
/// let caps = Capacities::try_from_pairs([(Group::Unit2, 5), (Group::Unit14, 9)]).unwrap();
/// assert_eq!(caps.get(Group::Unit2), 5);
/// assert_eq!(caps.get(Group::Unit3), 0);
///
/// assert!(Capacities::try_from_pairs([(Group::Unit2, 12)]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Capacities([u8; GROUP_COUNT]);

impl Capacities {
    /// All groups at capacity 0.
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Every group at the same capacity.
    pub fn uniform(capacity: i64) -> Result<Self, RotationError> {
        Self::try_from_pairs(Group::ALL.map(|g| (g, capacity)))
    }

    /// Builds capacities from `(group, headcount)` pairs.
    ///
    /// A later pair for the same group overwrites an earlier one. The whole
    /// request is rejected if any value is out of range.
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self, RotationError>
    where
        I: IntoIterator<Item = (Group, i64)>,
    {
        let mut caps = Self::zeroed();
        for (group, capacity) in pairs {
            caps.set(group, capacity)?;
        }
        Ok(caps)
    }

    /// Sets one group's capacity.
    pub fn set(&mut self, group: Group, capacity: i64) -> Result<(), RotationError> {
        let value = u8::try_from(capacity)
            .ok()
            .filter(|v| *v <= MAX_CAPACITY)
            .ok_or(RotationError::InvalidCapacity { group, capacity })?;
        self.0[group.index()] = value;
        Ok(())
    }

    /// Builder-style variant of [`Capacities::set`].
    pub fn with(mut self, group: Group, capacity: i64) -> Result<Self, RotationError> {
        self.set(group, capacity)?;
        Ok(self)
    }

    pub fn get(&self, group: Group) -> u8 {
        self.0[group.index()]
    }

    /// `(group, capacity)` in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (Group, u8)> + '_ {
        Group::ALL.into_iter().map(move |g| (g, self.get(g)))
    }

    /// Groups with non-zero capacity, in roster order.
    pub fn active(&self) -> impl Iterator<Item = Group> + '_ {
        self.iter().filter(|(_, c)| *c > 0).map(|(g, _)| g)
    }
}

impl TryFrom<[i64; GROUP_COUNT]> for Capacities {
    type Error = RotationError;

    /// Values are taken in roster order.
    fn try_from(values: [i64; GROUP_COUNT]) -> Result<Self, Self::Error> {
        Self::try_from_pairs(Group::ALL.into_iter().zip(values))
    }
}

impl TryFrom<&HashMap<Group, i64>> for Capacities {
    type Error = RotationError;

    fn try_from(map: &HashMap<Group, i64>) -> Result<Self, Self::Error> {
        // Roster order keeps the reported error stable when several are bad.
        Self::try_from_pairs(
            Group::ALL
                .into_iter()
                .filter_map(|g| map.get(&g).map(|c| (g, *c))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_zero() {
        let caps = Capacities::zeroed();
        assert!(caps.iter().all(|(_, c)| c == 0));
        assert_eq!(caps.active().count(), 0);
    }

    #[test]
    fn test_bounds_inclusive() {
        assert!(Capacities::uniform(0).is_ok());
        assert!(Capacities::uniform(11).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            Capacities::uniform(12).unwrap_err(),
            RotationError::InvalidCapacity {
                group: Group::Unit2,
                capacity: 12
            }
        );
        assert_eq!(
            Capacities::zeroed().with(Group::Unit8, -1).unwrap_err(),
            RotationError::InvalidCapacity {
                group: Group::Unit8,
                capacity: -1
            }
        );
    }

    #[test]
    fn test_from_array_roster_order() {
        let values: [i64; GROUP_COUNT] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let caps = Capacities::try_from(values).unwrap();
        assert_eq!(caps.get(Group::Unit2), 0);
        assert_eq!(caps.get(Group::Unit14), 10);
        assert_eq!(caps.active().count(), 10);
    }

    #[test]
    fn test_from_map_reports_first_bad_group_in_roster_order() {
        let map: HashMap<Group, i64> =
            HashMap::from([(Group::Unit13, 40), (Group::Unit3, 99), (Group::Unit5, 4)]);
        assert_eq!(
            Capacities::try_from(&map).unwrap_err(),
            RotationError::InvalidCapacity {
                group: Group::Unit3,
                capacity: 99
            }
        );
    }

    #[test]
    fn test_later_pair_wins() {
        let caps = Capacities::try_from_pairs([(Group::Unit6, 3), (Group::Unit6, 8)]).unwrap();
        assert_eq!(caps.get(Group::Unit6), 8);
    }
}
