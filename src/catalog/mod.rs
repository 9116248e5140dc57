//! Area catalog and group roster.
//!
//! Fixed, process-wide data: eleven groups and twenty-five cleaning areas
//! split into three disjoint tiers.
//!
//! | Tier      | Areas | Who draws from it                        |
//! |-----------|-------|------------------------------------------|
//! | `Highest` | 4     | capacity ≥ 4, not-biased groups first    |
//! | `High`    | 5     | capacity ≥ 4 groups left without Highest |
//! | `General` | 16    | everyone, plus core-tier leftovers       |
//!
//! The tier sizes and the capacity thresholds in [`crate::weekly`] are
//! tuned together; changing one means revisiting the other.

mod areas;
mod types;

pub use areas::{AreaCatalog, AREA_COUNT, GENERAL_AREAS, HIGHEST_AREAS, HIGH_AREAS};
pub use types::{Area, Group, Tier, GROUP_COUNT, MAX_CAPACITY};
