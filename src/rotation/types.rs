//! Rotation output.

use crate::capacity::Capacities;
use crate::weekly::{HighestSet, WeeklyAssignment};

/// One planned week.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeekPlan {
    /// 1-based week number.
    pub week: usize,

    /// Sub-seed this week's RNG was built from.
    pub seed: u64,

    /// Groups served last for Highest areas (last week's receivers).
    pub biased: HighestSet,

    pub assignment: WeeklyAssignment,

    /// Groups that received a Highest area this week.
    pub highest: HighestSet,
}

/// Result of a rotation run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RotationResult {
    /// Master seed the run used.
    pub seed: u64,

    /// Capacities the rotation was planned for.
    pub capacities: Capacities,

    /// Weeks in order.
    pub weeks: Vec<WeekPlan>,
}

impl RotationResult {
    /// Week `n`, 1-based.
    pub fn week(&self, n: usize) -> Option<&WeekPlan> {
        n.checked_sub(1).and_then(|i| self.weeks.get(i))
    }

    /// Assignments only, in week order.
    pub fn assignments(&self) -> impl Iterator<Item = &WeeklyAssignment> {
        self.weeks.iter().map(|w| &w.assignment)
    }
}
