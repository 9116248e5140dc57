//! Seeded cleaning-area rotation for residential groups.
//!
//! Eleven groups share twenty-five cleaning areas split into three tiers.
//! Each group declares a headcount (0–11) and receives areas accordingly,
//! with randomized but constrained allocation:
//!
//! - **Catalog** ([`catalog`]): the fixed group roster and the area tiers
//!   (Highest, High, General).
//! - **Weekly allocation** ([`weekly`]): staged draw-without-replacement
//!   from fresh tier pools, biased away from last week's Highest receivers.
//! - **Rotation** ([`rotation`]): five weeks in sequence, threading the
//!   Highest receivers forward, with a per-group report view.
//!
//! Every run is reproducible from its master seed.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use duty_rotation::{plan_rotation, Group};
//!
//! let caps: HashMap<Group, i64> = Group::ALL.into_iter().map(|g| (g, 11)).collect();
//! let result = plan_rotation(&caps, Some(2024)).unwrap();
//!
//! for row in result.rows() {
//!     println!("{} ({}): {}", row.group, row.capacity, row.weeks.join(" | "));
//! }
//! ```

pub mod capacity;
pub mod catalog;
pub mod error;
pub mod random;
pub mod rotation;
pub mod weekly;

pub use capacity::Capacities;
pub use catalog::{Area, Group, Tier};
pub use error::RotationError;
pub use rotation::{plan_rotation, RotationResult};
