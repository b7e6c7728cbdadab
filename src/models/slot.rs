//! Slot and slot window models.
//!
//! A slot holds one or two rounds that run concurrently. Slots are opened
//! by the packer and receive their time window from the solver.
//!
//! # Time Model
//! Windows are half-open `[start, end)` over `NaiveDateTime`. Every slot
//! spans exactly [`slot_length`]; consecutive slots are back-to-back.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use super::Round;

/// Length of every slot window (one hour).
pub fn slot_length() -> TimeDelta {
    TimeDelta::hours(1)
}

/// A time interval `[start, end)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotWindow {
    /// Interval start (inclusive).
    pub start: NaiveDateTime,
    /// Interval end (exclusive).
    pub end: NaiveDateTime,
}

impl SlotWindow {
    /// A one-hour window beginning at `start`.
    ///
    /// Returns `None` if the end would overflow the representable range.
    pub fn starting_at(start: NaiveDateTime) -> Option<Self> {
        let end = start.checked_add_signed(slot_length())?;
        Some(Self { start, end })
    }

    /// Duration of this window.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whether a timestamp falls within this window.
    #[inline]
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at < self.end
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A slot holding one or two non-conflicting rounds.
///
/// `first` is the round that opened the slot; `second` is the partner
/// found for it, if any. A slot never holds more than two rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    /// Round that opened the slot.
    pub first: Round,
    /// Partner round, when a compatible one was found.
    pub second: Option<Round>,
    /// Time window, stamped by the solver.
    pub window: Option<SlotWindow>,
}

impl Slot {
    /// Opens a slot with `first` as its only occupant.
    pub fn open(first: Round) -> Self {
        Self {
            first,
            second: None,
            window: None,
        }
    }

    /// Opens a slot holding both rounds.
    pub fn paired(first: Round, second: Round) -> Self {
        Self {
            first,
            second: Some(second),
            window: None,
        }
    }

    /// Places the partner round. Returns `false` if the slot is already full.
    pub fn place_second(&mut self, round: Round) -> bool {
        if self.second.is_some() {
            return false;
        }
        self.second = Some(round);
        true
    }

    /// Sets the time window.
    pub fn with_window(mut self, window: SlotWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Occupants in arrival order.
    pub fn rounds(&self) -> impl Iterator<Item = &Round> {
        std::iter::once(&self.first).chain(self.second.as_ref())
    }

    /// Number of occupants (1 or 2).
    pub fn len(&self) -> usize {
        1 + usize::from(self.second.is_some())
    }

    /// Whether the slot holds two rounds.
    pub fn is_paired(&self) -> bool {
        self.second.is_some()
    }

    /// Whether the slot holds the round with the given ID.
    pub fn contains_round(&self, round_id: &str) -> bool {
        self.rounds().any(|r| r.id == round_id)
    }

    /// Window start, once stamped.
    pub fn start(&self) -> Option<NaiveDateTime> {
        self.window.map(|w| w.start)
    }

    /// Window end, once stamped.
    pub fn end(&self) -> Option<NaiveDateTime> {
        self.window.map(|w| w.end)
    }
}
