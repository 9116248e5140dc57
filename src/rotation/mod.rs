//! Multi-week rotation.
//!
//! Chains the weekly allocator across consecutive weeks. Each week's
//! Highest receivers become the next week's biased set, so nobody is
//! preferred for a restroom two weeks running while someone else is free
//! to take it.

mod config;
mod report;
mod runner;
mod types;

pub use config::{RotationConfig, DEFAULT_WEEKS};
pub use report::ReportRow;
pub use runner::{plan_rotation, RotationRunner};
pub use types::{RotationResult, WeekPlan};
