//! Built-in conflict rules.
//!
//! Evaluated by [`ConflictOracle::standard`](super::ConflictOracle::standard)
//! in this order:
//!
//! 1. [`SameRound`]: a round cannot be paired with itself
//! 2. [`SameGame`]: a game serves one round per slot
//! 3. [`SharedPlayer`]: a player cannot be in two concurrent rounds

use super::ConflictRule;
use crate::models::Round;

/// Same round identity.
///
/// Also guards against self-pairing while the packer scans the full list.
#[derive(Debug, Clone, Copy)]
pub struct SameRound;

impl ConflictRule for SameRound {
    fn name(&self) -> &'static str {
        "SAME_ROUND"
    }

    fn conflicts(&self, a: &Round, b: &Round) -> bool {
        a.id == b.id
    }

    fn description(&self) -> &'static str {
        "Round cannot share a slot with itself"
    }
}

/// Same game.
#[derive(Debug, Clone, Copy)]
pub struct SameGame;

impl ConflictRule for SameGame {
    fn name(&self) -> &'static str {
        "SAME_GAME"
    }

    fn conflicts(&self, a: &Round, b: &Round) -> bool {
        a.game.same_game(&b.game)
    }

    fn description(&self) -> &'static str {
        "Game can run only one round per slot"
    }
}

/// Overlapping player sets.
///
/// O(min(|a|, |b|)) hash lookups.
#[derive(Debug, Clone, Copy)]
pub struct SharedPlayer;

impl ConflictRule for SharedPlayer {
    fn name(&self) -> &'static str {
        "SHARED_PLAYER"
    }

    fn conflicts(&self, a: &Round, b: &Round) -> bool {
        a.shares_player_with(b)
    }

    fn description(&self) -> &'static str {
        "Player cannot take part in two concurrent rounds"
    }
}
