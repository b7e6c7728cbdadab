//! Conflict rules and the conflict oracle.
//!
//! Decides whether two rounds may share a slot. Each exclusion rule is a
//! [`ConflictRule`]; the [`ConflictOracle`] evaluates an ordered list of
//! them and short-circuits on the first match.
//!
//! # Usage
//!
//! ```
//! use slot_planner::conflict::ConflictOracle;
//! use slot_planner::models::{Game, Round};
//!
//! let oracle = ConflictOracle::standard();
//! let a = Round::new("A", Game::new("G1")).with_player("u1");
//! let b = Round::new("B", Game::new("G2")).with_player("u1");
//!
//! assert!(oracle.conflicts(&a, &b));
//! assert_eq!(oracle.first_conflict(&a, &b), Some("SHARED_PLAYER"));
//! ```

mod oracle;
pub mod rules;

pub use oracle::ConflictOracle;

use crate::models::Round;
use std::fmt::Debug;

/// A pairwise exclusion rule.
///
/// Implementations must be pure and symmetric: `conflicts(a, b)` must
/// equal `conflicts(b, a)`.
pub trait ConflictRule: Send + Sync + Debug {
    /// Rule name (e.g., "SAME_GAME").
    fn name(&self) -> &'static str;

    /// Whether `a` and `b` may not share a slot under this rule.
    fn conflicts(&self, a: &Round, b: &Round) -> bool;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
