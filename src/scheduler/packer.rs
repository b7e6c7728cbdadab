//! Greedy first-fit slot packer.
//!
//! # Algorithm
//!
//! 1. Walk rounds in input order, skipping any already placed.
//! 2. Each unplaced round A opens a new slot.
//! 3. Scan the *whole* list from the start for the first unplaced round B
//!    that does not conflict with A; B becomes A's partner (first-fit).
//! 4. If no partner exists, the slot holds A alone.
//!
//! The slot count depends on input order. The solver exploits this by
//! re-running the packer on different orderings.
//!
//! # Complexity
//! O(n²) conflict checks per pass.

use std::borrow::Borrow;

use crate::conflict::ConflictOracle;
use crate::models::{Round, Slot};

/// A packing expressed as positions into the packed list:
/// `(first, second)` per slot, in slot order.
pub type Packing = Vec<(usize, Option<usize>)>;

/// Single-pass greedy packer.
///
/// # Example
///
/// ```
/// use slot_planner::models::{Game, Round};
/// use slot_planner::scheduler::SlotPacker;
///
/// let rounds = vec![
///     Round::new("A", Game::new("G1")).with_player("u1"),
///     Round::new("B", Game::new("G2")).with_player("u1"),
///     Round::new("C", Game::new("G3")).with_player("u2"),
/// ];
/// let slots = SlotPacker::new().pack(&rounds);
/// assert_eq!(slots.len(), 2);
/// assert_eq!(slots[0].second.as_ref().unwrap().id, "C");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlotPacker {
    oracle: ConflictOracle,
}

impl SlotPacker {
    /// Creates a packer using the standard conflict rules.
    pub fn new() -> Self {
        Self {
            oracle: ConflictOracle::standard(),
        }
    }

    /// Sets the conflict oracle.
    pub fn with_oracle(mut self, oracle: ConflictOracle) -> Self {
        self.oracle = oracle;
        self
    }

    /// The oracle used for pairing decisions.
    pub fn oracle(&self) -> &ConflictOracle {
        &self.oracle
    }

    /// Packs rounds into slots, cloning each round into its slot.
    ///
    /// Duplicate rounds are not merged; every list position is placed once.
    pub fn pack<R: Borrow<Round>>(&self, rounds: &[R]) -> Vec<Slot> {
        let packing = self.pack_indices(rounds);
        Self::materialize(rounds, &packing)
    }

    /// Packs rounds and returns list positions instead of slots.
    pub fn pack_indices<R: Borrow<Round>>(&self, rounds: &[R]) -> Packing {
        let mut placed = vec![false; rounds.len()];
        let mut packing = Vec::new();

        for a in 0..rounds.len() {
            if placed[a] {
                continue;
            }
            placed[a] = true;
            let first: &Round = rounds[a].borrow();

            let partner = (0..rounds.len()).find(|&b| {
                !placed[b] && !self.oracle.conflicts(first, rounds[b].borrow())
            });

            if let Some(b) = partner {
                placed[b] = true;
            }
            packing.push((a, partner));
        }

        packing
    }

    /// Builds slots from a packing over the same list.
    pub fn materialize<R: Borrow<Round>>(
        rounds: &[R],
        packing: &[(usize, Option<usize>)],
    ) -> Vec<Slot> {
        let round_at = |i: usize| -> Round {
            let round: &Round = rounds[i].borrow();
            round.clone()
        };

        packing
            .iter()
            .map(|&(a, b)| {
                let mut slot = Slot::open(round_at(a));
                if let Some(b) = b {
                    slot.place_second(round_at(b));
                }
                slot
            })
            .collect()
    }
}
