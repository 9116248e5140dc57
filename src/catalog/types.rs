//! Group, tier and area identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::RotationError;

/// Number of groups in the roster.
pub const GROUP_COUNT: usize = 11;

/// Largest headcount a group may declare.
pub const MAX_CAPACITY: u8 = 11;

/// One of the residential groups sharing cleaning duty.
///
/// Variants are declared in roster order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Group {
    Unit2,
    Unit3,
    Unit5,
    Unit6,
    Unit7,
    Unit8,
    Unit10,
    Unit11,
    Unit12,
    Unit13,
    Unit14,
}

impl Group {
    /// The full roster in canonical order.
    pub const ALL: [Group; GROUP_COUNT] = [
        Group::Unit2,
        Group::Unit3,
        Group::Unit5,
        Group::Unit6,
        Group::Unit7,
        Group::Unit8,
        Group::Unit10,
        Group::Unit11,
        Group::Unit12,
        Group::Unit13,
        Group::Unit14,
    ];

    /// Position of this group in [`Group::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name, e.g. `"Unit 10"`.
    pub fn name(self) -> &'static str {
        match self {
            Group::Unit2 => "Unit 2",
            Group::Unit3 => "Unit 3",
            Group::Unit5 => "Unit 5",
            Group::Unit6 => "Unit 6",
            Group::Unit7 => "Unit 7",
            Group::Unit8 => "Unit 8",
            Group::Unit10 => "Unit 10",
            Group::Unit11 => "Unit 11",
            Group::Unit12 => "Unit 12",
            Group::Unit13 => "Unit 13",
            Group::Unit14 => "Unit 14",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Group {
    type Err = RotationError;

    /// Accepts the display name (`"Unit 7"`) or its compact form (`"unit7"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        Group::ALL
            .into_iter()
            .find(|g| {
                let name: String = g.name().chars().filter(|c| !c.is_whitespace()).collect();
                name.eq_ignore_ascii_case(&wanted)
            })
            .ok_or_else(|| RotationError::UnknownGroup(s.to_string()))
    }
}

/// Difficulty tier of a cleaning area.
///
/// Tiers are listed from hardest to easiest; leftover areas only ever move
/// down to [`Tier::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    Highest,
    High,
    General,
}

/// A physical location to be cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Area {
    /// Human-readable name, unique across the catalog.
    pub name: &'static str,
    /// Tier the area belongs to.
    pub tier: Tier,
}

impl Area {
    pub const fn new(name: &'static str, tier: Tier) -> Self {
        Self { name, tier }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
