//! Round model.
//!
//! A round is a unit of work played on one game by a set of players.
//! Rounds are the items the planner pairs into slots.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Game;

/// A round to be placed into a slot.
///
/// Player IDs are unique within a round (stored as a set) but the same
/// player may appear in many rounds. Rounds are treated as immutable for
/// the duration of a planning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    /// Unique round identifier.
    pub id: String,
    /// The game this round runs on.
    pub game: Game,
    /// Participating player IDs.
    pub players: HashSet<String>,
}

impl Round {
    /// Creates a round with no players.
    pub fn new(id: impl Into<String>, game: Game) -> Self {
        Self {
            id: id.into(),
            game,
            players: HashSet::new(),
        }
    }

    /// Adds a player.
    pub fn with_player(mut self, player_id: impl Into<String>) -> Self {
        self.players.insert(player_id.into());
        self
    }

    /// Adds several players.
    pub fn with_players<I, S>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players.extend(players.into_iter().map(Into::into));
        self
    }

    /// The game ID (shorthand for `self.game.game_id`).
    #[inline]
    pub fn game_id(&self) -> &str {
        &self.game.game_id
    }

    /// Whether `player_id` takes part in this round.
    #[inline]
    pub fn has_player(&self, player_id: &str) -> bool {
        self.players.contains(player_id)
    }

    /// Whether any player takes part in both rounds.
    ///
    /// Probes the larger set with members of the smaller one.
    pub fn shares_player_with(&self, other: &Round) -> bool {
        let (small, large) = if self.players.len() <= other.players.len() {
            (&self.players, &other.players)
        } else {
            (&other.players, &self.players)
        };
        small.iter().any(|p| large.contains(p))
    }

    /// Number of players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}
