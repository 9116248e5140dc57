#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use duty_rotation::weekly::WeeklyAssignment;
use duty_rotation::Group;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("duty_rotation=debug"))
        .with_test_writer()
        .try_init();
}

pub fn uniform(capacity: i64) -> HashMap<Group, i64> {
    Group::ALL.into_iter().map(|g| (g, capacity)).collect()
}

pub fn only(group: Group, capacity: i64) -> HashMap<Group, i64> {
    HashMap::from([(group, capacity)])
}

/// True when no area name occurs twice in the week.
pub fn all_unique(week: &WeeklyAssignment) -> bool {
    let mut seen = HashSet::new();
    week.iter()
        .flat_map(|(_, areas)| areas.iter())
        .all(|area| seen.insert(area.name))
}
