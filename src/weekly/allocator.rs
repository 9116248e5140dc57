//! Staged single-week allocation.
//!
//! # Algorithm
//!
//! 1. Shuffle the roster once; every stage takes candidates in that order
//!    and shuffles the subset again before serving it
//! 2. Capacity 1–3: one General area each
//! 3. Capacity ≥ 4 without an area: Highest to not-biased groups, then to
//!    biased groups, then High to whoever is still empty; leftovers of both
//!    core tiers fall into General, which is reshuffled
//! 4. Any active group still without an area: one General area
//! 5. Capacity ≥ 4 holding one area: one more General area
//! 6. Capacity ≥ 8 holding two areas: one more General area
//! 7. Whatever General remains is dealt round-robin, highest capacity
//!    first, to the groups selected by [`OverflowPolicy`]
//!
//! Every draw removes a uniformly chosen area from its pool, so no area
//! is handed out twice in one week. An empty pool ends the stage.

use std::cmp::Reverse;

use itertools::Itertools;
use rand::Rng;
use tracing::trace;

use super::config::{AllocatorConfig, OverflowPolicy};
use super::types::{HighestSet, WeeklyAssignment};
use crate::capacity::Capacities;
use crate::catalog::{Area, Group, Tier};
use crate::random::{create_rng, pop_random, shuffle};

/// Largest capacity that receives a single area.
pub const LOW_CAPACITY_MAX: u8 = 3;

/// Smallest capacity that competes for a core (Highest/High) area.
pub const CORE_CAPACITY_MIN: u8 = 4;

/// Smallest capacity that receives a third area.
pub const THIRD_AREA_CAPACITY_MIN: u8 = 8;

/// Assigns one week of cleaning areas.
pub struct WeeklyAllocator;

impl WeeklyAllocator {
    /// Runs every stage for one week.
    ///
    /// `prior_biased` holds last week's `Highest` receivers; they are served
    /// after everyone else for `Highest` areas. Returns the assignment and
    /// this week's `Highest` receivers.
    ///
    /// # Examples
    ///
    /// ```
    /// use duty_rotation::random::create_rng;
    /// use duty_rotation::weekly::{AllocatorConfig, HighestSet, WeeklyAllocator};
    /// use duty_rotation::{Capacities, Group};
    ///
    /// let caps = Capacities::zeroed().with(Group::Unit5, 5).unwrap();
    /// let mut rng = create_rng(1);
    /// let (week, highest) =
    ///     WeeklyAllocator::allocate(&caps, &HighestSet::new(), &AllocatorConfig::default(), &mut rng);
    ///
    /// assert_eq!(week.count(Group::Unit5), 2);
    /// assert!(highest.contains(Group::Unit5));
    /// ```
    pub fn allocate<R: Rng + ?Sized>(
        capacities: &Capacities,
        prior_biased: &HighestSet,
        config: &AllocatorConfig,
        rng: &mut R,
    ) -> (WeeklyAssignment, HighestSet) {
        let mut week = Week::new(capacities, rng);

        week.assign_low_capacity();
        week.assign_core(prior_biased);
        week.assign_catch_up();
        week.assign_extra(CORE_CAPACITY_MIN, 1);
        week.assign_extra(THIRD_AREA_CAPACITY_MIN, 2);
        week.assign_overflow(config.overflow);

        let assignment = week.assignment;
        let highest = HighestSet::from_assignment(&assignment);
        (assignment, highest)
    }

    /// Same as [`WeeklyAllocator::allocate`] with a fresh RNG built from `seed`.
    ///
    /// Replays a single week of a rotation from its recorded sub-seed.
    pub fn allocate_seeded(
        capacities: &Capacities,
        prior_biased: &HighestSet,
        config: &AllocatorConfig,
        seed: u64,
    ) -> (WeeklyAssignment, HighestSet) {
        let mut rng = create_rng(seed);
        Self::allocate(capacities, prior_biased, config, &mut rng)
    }
}

/// Working state for one allocation call.
struct Week<'a, R: ?Sized> {
    capacities: &'a Capacities,
    rng: &'a mut R,
    order: Vec<Group>,
    assignment: WeeklyAssignment,
    highest: Vec<Area>,
    high: Vec<Area>,
    general: Vec<Area>,
}

impl<'a, R: Rng + ?Sized> Week<'a, R> {
    fn new(capacities: &'a Capacities, rng: &'a mut R) -> Self {
        let mut order = Group::ALL.to_vec();
        shuffle(&mut order, rng);
        Self {
            capacities,
            rng,
            order,
            assignment: WeeklyAssignment::empty(),
            highest: Tier::Highest.areas().to_vec(),
            high: Tier::High.areas().to_vec(),
            general: Tier::General.areas().to_vec(),
        }
    }

    /// Groups matching `pred(capacity, held)`, in processing order.
    fn select(&self, pred: impl Fn(u8, usize) -> bool) -> Vec<Group> {
        self.order
            .iter()
            .copied()
            .filter(|g| pred(self.capacities.get(*g), self.assignment.count(*g)))
            .collect()
    }

    /// Like [`Week::select`], then shuffled.
    fn candidates(&mut self, pred: impl Fn(u8, usize) -> bool) -> Vec<Group> {
        let mut groups = self.select(pred);
        shuffle(&mut groups, self.rng);
        groups
    }

    fn assign_low_capacity(&mut self) {
        let groups = self.candidates(|cap, _| (1..=LOW_CAPACITY_MAX).contains(&cap));
        let dealt = deal(&groups, &mut self.general, &mut self.assignment, self.rng);
        trace!(candidates = groups.len(), dealt, "low-capacity stage");
    }

    fn assign_core(&mut self, prior_biased: &HighestSet) {
        let core = self.select(|cap, held| cap >= CORE_CAPACITY_MIN && held == 0);
        let (mut fresh, mut biased): (Vec<Group>, Vec<Group>) =
            core.iter().partition(|g| !prior_biased.contains(**g));
        shuffle(&mut fresh, self.rng);
        shuffle(&mut biased, self.rng);

        let to_fresh = deal(&fresh, &mut self.highest, &mut self.assignment, self.rng);
        let to_biased = deal(&biased, &mut self.highest, &mut self.assignment, self.rng);

        let mut remaining: Vec<Group> = core
            .iter()
            .copied()
            .filter(|g| self.assignment.count(*g) == 0)
            .collect();
        shuffle(&mut remaining, self.rng);
        let to_high = deal(&remaining, &mut self.high, &mut self.assignment, self.rng);

        let leftover = self.highest.len() + self.high.len();
        self.general.append(&mut self.highest);
        self.general.append(&mut self.high);
        shuffle(&mut self.general, self.rng);

        trace!(
            candidates = core.len(),
            to_fresh,
            to_biased,
            to_high,
            leftover,
            "core stage"
        );
    }

    fn assign_catch_up(&mut self) {
        let groups = self.candidates(|cap, held| cap > 0 && held == 0);
        let dealt = deal(&groups, &mut self.general, &mut self.assignment, self.rng);
        trace!(candidates = groups.len(), dealt, "catch-up stage");
    }

    /// One more General area for groups of at least `min_capacity` that
    /// currently hold exactly `held_now` areas.
    fn assign_extra(&mut self, min_capacity: u8, held_now: usize) {
        let groups = self.candidates(|cap, held| cap >= min_capacity && held == held_now);
        let dealt = deal(&groups, &mut self.general, &mut self.assignment, self.rng);
        trace!(min_capacity, candidates = groups.len(), dealt, "extra-area stage");
    }

    fn assign_overflow(&mut self, policy: OverflowPolicy) {
        if self.general.is_empty() {
            return;
        }
        let capacities = self.capacities;
        let eligible = |cap: u8| match policy {
            OverflowPolicy::HighCapacity => cap >= THIRD_AREA_CAPACITY_MIN,
            OverflowPolicy::AllActive => cap > 0,
            OverflowPolicy::Disabled => false,
        };

        let by_capacity = Group::ALL
            .into_iter()
            .filter(|g| eligible(capacities.get(*g)))
            .sorted_by_key(|g| Reverse(capacities.get(*g)))
            .chunk_by(|g| capacities.get(*g));

        let mut ordered = Vec::new();
        for (_, same_capacity) in &by_capacity {
            let mut tier: Vec<Group> = same_capacity.collect();
            shuffle(&mut tier, self.rng);
            ordered.extend(tier);
        }

        let pool = self.general.len();
        for group in ordered.iter().cycle() {
            match pop_random(&mut self.general, self.rng) {
                Some(area) => self.assignment.push(*group, area),
                None => break,
            }
        }
        trace!(
            candidates = ordered.len(),
            dealt = pool - self.general.len(),
            unassigned = self.general.len(),
            "overflow stage"
        );
    }
}

/// Gives each group in `groups` one area from `pool`, stopping when the
/// pool runs dry. Returns the number of areas dealt.
fn deal<R: Rng + ?Sized>(
    groups: &[Group],
    pool: &mut Vec<Area>,
    assignment: &mut WeeklyAssignment,
    rng: &mut R,
) -> usize {
    let mut dealt = 0;
    for group in groups {
        let Some(area) = pop_random(pool, rng) else {
            break;
        };
        assignment.push(*group, area);
        dealt += 1;
    }
    dealt
}
