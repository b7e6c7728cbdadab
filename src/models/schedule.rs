//! Schedule (solution) model.
//!
//! A schedule is the ordered sequence of stamped slots accepted by the
//! solver, together with the ceiling it was solved against and whether
//! that ceiling was met.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Slot;

/// An ordered, time-stamped slot sequence.
///
/// Slot order reflects packing order, not priority.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Slots in packing order.
    pub slots: Vec<Slot>,
    /// Slot ceiling the schedule was solved against.
    pub max_slots: usize,
    /// Whether `slots.len() <= max_slots`.
    pub met_ceiling: bool,
    /// Rotation index of the accepted packing. `None` for empty input.
    pub rotation: Option<usize>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of rounds across all slots.
    pub fn round_count(&self) -> usize {
        self.slots.iter().map(Slot::len).sum()
    }

    /// Number of slots holding two rounds.
    pub fn paired_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_paired()).count()
    }

    /// Whether the schedule has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Finds the slot (and its index) holding a round.
    pub fn slot_for_round(&self, round_id: &str) -> Option<(usize, &Slot)> {
        self.slots
            .iter()
            .enumerate()
            .find(|(_, s)| s.contains_round(round_id))
    }

    /// Start of the first slot.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        self.slots.first().and_then(Slot::start)
    }

    /// End of the last slot.
    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        self.slots.last().and_then(Slot::end)
    }

    /// Slots beyond the ceiling (0 when the ceiling was met).
    pub fn overshoot(&self) -> usize {
        self.slot_count().saturating_sub(self.max_slots)
    }
}
