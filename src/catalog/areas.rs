//! The fixed area catalog.

use super::types::{Area, Tier};

/// Restrooms and the bathhouse.
pub const HIGHEST_AREAS: [Area; 4] = [
    Area::new("1F restroom", Tier::Highest),
    Area::new("2F restroom", Tier::Highest),
    Area::new("3F restroom", Tier::Highest),
    Area::new("1F bathhouse", Tier::Highest),
];

/// Shower rooms and washrooms.
pub const HIGH_AREAS: [Area; 5] = [
    Area::new("2F shower room", Tier::High),
    Area::new("3F shower room", Tier::High),
    Area::new("1F washroom", Tier::High),
    Area::new("2F washroom", Tier::High),
    Area::new("3F washroom", Tier::High),
];

pub const GENERAL_AREAS: [Area; 16] = [
    Area::new("1F laundry room", Tier::General),
    Area::new("1F hallway", Tier::General),
    Area::new("2F hallway", Tier::General),
    Area::new("3F hallway", Tier::General),
    Area::new("East stairwell", Tier::General),
    Area::new("Central stairwell", Tier::General),
    Area::new("2F lounge", Tier::General),
    Area::new("3F lounge", Tier::General),
    Area::new("Fitness room", Tier::General),
    Area::new("Boot care room", Tier::General),
    Area::new("Shared laundry", Tier::General),
    Area::new("Billiards room", Tier::General),
    Area::new("Computer room", Tier::General),
    Area::new("Karaoke room", Tier::General),
    Area::new("2F laundry room", Tier::General),
    Area::new("3F laundry room", Tier::General),
];

/// Total number of areas across all tiers.
pub const AREA_COUNT: usize = HIGHEST_AREAS.len() + HIGH_AREAS.len() + GENERAL_AREAS.len();

/// Read-only access to the area catalog.
pub struct AreaCatalog;

impl AreaCatalog {
    /// Areas of one tier, in catalog order.
    pub fn tier(tier: Tier) -> &'static [Area] {
        match tier {
            Tier::Highest => &HIGHEST_AREAS,
            Tier::High => &HIGH_AREAS,
            Tier::General => &GENERAL_AREAS,
        }
    }

    /// Every area, hardest tier first.
    pub fn all() -> impl Iterator<Item = Area> {
        HIGHEST_AREAS
            .into_iter()
            .chain(HIGH_AREAS)
            .chain(GENERAL_AREAS)
    }

    /// Looks up an area by its exact name.
    pub fn find(name: &str) -> Option<Area> {
        Self::all().find(|area| area.name == name)
    }
}

impl Tier {
    /// Shorthand for [`AreaCatalog::tier`].
    pub fn areas(self) -> &'static [Area] {
        AreaCatalog::tier(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tier_sizes() {
        assert_eq!(Tier::Highest.areas().len(), 4);
        assert_eq!(Tier::High.areas().len(), 5);
        assert_eq!(Tier::General.areas().len(), 16);
        assert_eq!(AREA_COUNT, 25);
    }

    #[test]
    fn test_names_unique() {
        let names: HashSet<&str> = AreaCatalog::all().map(|a| a.name).collect();
        assert_eq!(names.len(), AREA_COUNT);
    }

    #[test]
    fn test_tier_membership_consistent() {
        for tier in [Tier::Highest, Tier::High, Tier::General] {
            assert!(tier.areas().iter().all(|a| a.tier == tier));
        }
    }

    #[test]
    fn test_find() {
        let area = AreaCatalog::find("1F bathhouse").unwrap();
        assert_eq!(area.tier, Tier::Highest);
        assert!(AreaCatalog::find("rooftop").is_none());
    }
}
