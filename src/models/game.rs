//! Game model.
//!
//! A game is the scarce capability a round runs on. Only one round per
//! game may occupy a slot.

use serde::{Deserialize, Serialize};

/// A game that rounds are played on.
///
/// Identity is the `game_id` alone; `name` and `provider` are descriptive
/// and never take part in conflict detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Unique game identifier.
    pub game_id: String,
    /// Human-readable name.
    pub name: String,
    /// Game provider (studio or vendor).
    pub provider: Option<String>,
}

impl Game {
    /// Creates a game with the given ID.
    pub fn new(game_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            name: String::new(),
            provider: None,
        }
    }

    /// Sets the game name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the provider.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Whether two games are the same capability.
    #[inline]
    pub fn same_game(&self, other: &Self) -> bool {
        self.game_id == other.game_id
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.same_game(other)
    }
}

impl Eq for Game {}
