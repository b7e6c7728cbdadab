//! Rotation-search slot solver.
//!
//! # Algorithm
//!
//! 1. Copy the round ordering (the caller's list is never reordered).
//! 2. For i in 0..n: swap position 0 with position i, pack, and stop as
//!    soon as the slot count is within the ceiling.
//! 3. If no rotation fits, keep the packing of the last rotation.
//! 4. Stamp slot k with `[start + k h, start + (k+1) h)`.
//!
//! The swaps accumulate across iterations, so the n orderings probed are
//! a deterministic walk, not a permutation search.
//!
//! # Complexity
//! O(n) packing passes × O(n²) conflict checks = O(n³). Inputs in the
//! low thousands of rounds are the practical limit.

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use super::packer::{Packing, SlotPacker};
use crate::config::{CeilingPolicy, PlannerConfig};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{Round, Schedule, Slot, SlotWindow};
use crate::validation::{duplicate_round_ids, validate_rounds};

/// Input container for a planning run.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Rounds to place.
    pub rounds: Vec<Round>,
    /// Target slot count.
    pub max_slots: usize,
    /// Start of the first slot.
    pub start: NaiveDateTime,
}

impl ScheduleRequest {
    /// Creates a request. The ceiling defaults to one slot per round,
    /// which any packing satisfies.
    pub fn new(rounds: Vec<Round>, start: NaiveDateTime) -> Self {
        let max_slots = rounds.len();
        Self {
            rounds,
            max_slots,
            start,
        }
    }

    /// Sets the slot ceiling.
    pub fn with_max_slots(mut self, max_slots: usize) -> Self {
        self.max_slots = max_slots;
        self
    }
}

/// Bounded search over round orderings for a packing within a ceiling.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use slot_planner::models::{Game, Round};
/// use slot_planner::scheduler::SlotSolver;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1)
///     .unwrap()
///     .and_hms_opt(18, 0, 0)
///     .unwrap();
/// let rounds = vec![
///     Round::new("A", Game::new("G1")).with_player("u1"),
///     Round::new("B", Game::new("G2")).with_player("u2"),
/// ];
///
/// let schedule = SlotSolver::new().solve(&rounds, 1, start).unwrap();
/// assert!(schedule.met_ceiling);
/// assert_eq!(schedule.slot_count(), 1);
/// assert_eq!(schedule.starts_at(), Some(start));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlotSolver {
    packer: SlotPacker,
    policy: CeilingPolicy,
}

impl SlotSolver {
    /// Creates a best-effort solver with the standard conflict rules.
    pub fn new() -> Self {
        Self {
            packer: SlotPacker::new(),
            policy: CeilingPolicy::BestEffort,
        }
    }

    /// Creates a solver following the configured ceiling policy.
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new().with_policy(config.planner.ceiling)
    }

    /// Sets the packer.
    pub fn with_packer(mut self, packer: SlotPacker) -> Self {
        self.packer = packer;
        self
    }

    /// Sets the ceiling policy used by [`schedule_request`](Self::schedule_request).
    pub fn with_policy(mut self, policy: CeilingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Best-effort solve.
    ///
    /// Always returns a schedule holding every round; `met_ceiling` tells
    /// whether it fits within `max_slots`.
    ///
    /// # Errors
    /// [`PlannerError::InvalidInput`] if any round fails validation,
    /// [`PlannerError::TimeOverflow`] if a slot window leaves the calendar.
    pub fn solve(
        &self,
        rounds: &[Round],
        max_slots: usize,
        start: NaiveDateTime,
    ) -> PlannerResult<Schedule> {
        validate_rounds(rounds).map_err(PlannerError::InvalidInput)?;

        let dups = duplicate_round_ids(rounds);
        if !dups.is_empty() {
            warn!(?dups, "duplicate round ids, each copy is placed separately");
        }

        if rounds.is_empty() {
            return Ok(Schedule {
                max_slots,
                met_ceiling: true,
                ..Schedule::new()
            });
        }

        let mut working: Vec<&Round> = rounds.iter().collect();
        let (rotation, packing) = self.search(&mut working, max_slots);

        let slots = stamp(SlotPacker::materialize(&working, &packing), start)?;
        let met_ceiling = slots.len() <= max_slots;

        if met_ceiling {
            info!(rotation, slots = slots.len(), max_slots, "schedule accepted");
        } else {
            warn!(
                slots = slots.len(),
                max_slots,
                "no rotation met the slot ceiling, returning last packing"
            );
        }

        Ok(Schedule {
            slots,
            max_slots,
            met_ceiling,
            rotation: Some(rotation),
        })
    }

    /// Strict solve: fails when the ceiling cannot be met.
    ///
    /// # Errors
    /// As [`solve`](Self::solve), plus
    /// [`PlannerError::ConstraintUnsatisfiable`] when the best packing
    /// exceeds `max_slots`.
    pub fn solve_strict(
        &self,
        rounds: &[Round],
        max_slots: usize,
        start: NaiveDateTime,
    ) -> PlannerResult<Schedule> {
        let schedule = self.solve(rounds, max_slots, start)?;
        if !schedule.met_ceiling {
            return Err(PlannerError::ConstraintUnsatisfiable {
                slots: schedule.slot_count(),
                max_slots,
            });
        }
        Ok(schedule)
    }

    /// Solves a request under this solver's ceiling policy.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> PlannerResult<Schedule> {
        match self.policy {
            CeilingPolicy::BestEffort => {
                self.solve(&request.rounds, request.max_slots, request.start)
            }
            CeilingPolicy::Strict => {
                self.solve_strict(&request.rounds, request.max_slots, request.start)
            }
        }
    }

    /// Runs the rotation walk over `working`, leaving it in the order of
    /// the accepted packing. Requires a non-empty list.
    fn search(&self, working: &mut [&Round], max_slots: usize) -> (usize, Packing) {
        let mut accepted = (0, Packing::new());

        for i in 0..working.len() {
            working.swap(0, i);
            let packing = self.packer.pack_indices(working);
            debug!(rotation = i, slots = packing.len(), max_slots, "packing attempt");

            let fits = packing.len() <= max_slots;
            accepted = (i, packing);
            if fits {
                break;
            }
        }

        accepted
    }
}

/// Assigns back-to-back one-hour windows starting at `start`.
fn stamp(slots: Vec<Slot>, start: NaiveDateTime) -> PlannerResult<Vec<Slot>> {
    let mut cursor = start;
    slots
        .into_iter()
        .enumerate()
        .map(|(idx, slot)| {
            let window = SlotWindow::starting_at(cursor).ok_or(PlannerError::TimeOverflow(idx))?;
            cursor = window.end;
            Ok(slot.with_window(window))
        })
        .collect()
}
