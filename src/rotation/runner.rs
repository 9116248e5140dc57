//! Multi-week driver.

use std::collections::HashMap;

use rand::Rng;
use tracing::{debug, instrument};

use super::config::RotationConfig;
use super::types::{RotationResult, WeekPlan};
use crate::capacity::Capacities;
use crate::catalog::Group;
use crate::error::RotationError;
use crate::random::{create_rng, resolve_seed};
use crate::weekly::{HighestSet, WeeklyAllocator};

/// Runs the weekly allocator once per week, carrying each week's Highest
/// receivers into the next week as the biased set.
pub struct RotationRunner;

impl RotationRunner {
    /// Plans a rotation.
    ///
    /// A master RNG seeded from `config.seed` (or system entropy) produces
    /// one sub-seed per week; each week gets its own RNG from that sub-seed.
    /// Week 1 starts with no biased groups.
    ///
    /// # Examples
    ///
    /// ```
    /// use duty_rotation::rotation::{RotationConfig, RotationRunner};
    /// use duty_rotation::Capacities;
    ///
    /// let caps = Capacities::uniform(11).unwrap();
    /// let config = RotationConfig::default().with_seed(7);
    /// let result = RotationRunner::run(&caps, &config).unwrap();
    ///
    /// assert_eq!(result.weeks.len(), 5);
    /// assert!(result.weeks.iter().all(|w| w.assignment.total_assigned() == 25));
    /// ```
    #[instrument(skip_all, fields(weeks = config.weeks, seed = tracing::field::Empty))]
    pub fn run(
        capacities: &Capacities,
        config: &RotationConfig,
    ) -> Result<RotationResult, RotationError> {
        config.validate()?;

        let seed = resolve_seed(config.seed);
        tracing::Span::current().record("seed", seed);
        let mut master = create_rng(seed);

        let mut weeks = Vec::with_capacity(config.weeks);
        let mut biased = HighestSet::new();

        for week in 1..=config.weeks {
            let week_seed: u64 = master.random();
            let (assignment, highest) =
                WeeklyAllocator::allocate_seeded(capacities, &biased, &config.allocator, week_seed);

            debug!(
                week,
                week_seed,
                assigned = assignment.total_assigned(),
                biased = biased.len(),
                highest = highest.len(),
                "week planned"
            );

            let next_biased = highest.clone();
            weeks.push(WeekPlan {
                week,
                seed: week_seed,
                biased,
                assignment,
                highest,
            });
            biased = next_biased;
        }

        Ok(RotationResult {
            seed,
            capacities: *capacities,
            weeks,
        })
    }
}

/// Plans a standard five-week rotation from a raw capacity mapping.
///
/// Groups missing from `capacities` count as 0. Any value outside `0..=11`
/// rejects the whole request with [`RotationError::InvalidCapacity`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use duty_rotation::{plan_rotation, Group};
///
/// let caps = HashMap::from([(Group::Unit2, 5_i64), (Group::Unit3, 2)]);
/// let result = plan_rotation(&caps, Some(42)).unwrap();
/// assert_eq!(result, plan_rotation(&caps, Some(42)).unwrap());
///
/// let bad = HashMap::from([(Group::Unit2, 12_i64)]);
/// assert!(plan_rotation(&bad, None).is_err());
/// ```
pub fn plan_rotation(
    capacities: &HashMap<Group, i64>,
    seed: Option<u64>,
) -> Result<RotationResult, RotationError> {
    let capacities = Capacities::try_from(capacities)?;
    let config = RotationConfig {
        seed,
        ..RotationConfig::default()
    };
    RotationRunner::run(&capacities, &config)
}
