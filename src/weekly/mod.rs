//! Weekly allocation.
//!
//! Hands out one week of cleaning areas from fresh copies of the catalog
//! pools. Capacity decides how many areas a group gets:
//!
//! - 0: none
//! - 1–3: one General area
//! - 4–7: one core area (Highest, else High, else General) plus one General
//! - 8–11: as 4–7, plus a third General area and a share of the leftovers
//!
//! Groups that cleaned a Highest area last week (the *biased* set) are
//! served last for Highest areas this week.

mod allocator;
mod config;
mod types;

pub use allocator::{
    WeeklyAllocator, CORE_CAPACITY_MIN, LOW_CAPACITY_MAX, THIRD_AREA_CAPACITY_MIN,
};
pub use config::{AllocatorConfig, OverflowPolicy};
pub use types::{HighestSet, WeeklyAssignment};
