//! Tabular view of a rotation.
//!
//! One row per group: capacity, then one cell per week with the week's
//! areas joined by `", "`. Drawing the table is left to the caller.

use std::fmt;

use super::types::RotationResult;
use crate::catalog::Group;

/// One group's line in the rotation report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReportRow {
    pub group: Group,
    pub capacity: u8,
    /// One cell per week; empty when the group had no areas.
    pub weeks: Vec<String>,
}

impl RotationResult {
    /// Report rows in roster order.
    pub fn rows(&self) -> Vec<ReportRow> {
        self.capacities
            .iter()
            .map(|(group, capacity)| ReportRow {
                group,
                capacity,
                weeks: self.assignments().map(|w| w.joined(group)).collect(),
            })
            .collect()
    }
}

/// Tab-separated rendering with a header line.
impl fmt::Display for RotationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group\tcapacity")?;
        for plan in &self.weeks {
            write!(f, "\tweek {}", plan.week)?;
        }
        writeln!(f)?;
        for row in self.rows() {
            write!(f, "{}\t{}", row.group, row.capacity)?;
            for cell in &row.weeks {
                write!(f, "\t{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
