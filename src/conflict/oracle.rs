//! Conflict oracle: ordered evaluation of conflict rules.

use std::sync::Arc;

use super::{rules, ConflictRule};
use crate::models::Round;

/// Ordered list of conflict rules, evaluated short-circuit.
///
/// Additional rules appended with [`with_rule`](Self::with_rule) run
/// after the existing ones; the packer needs no changes to honour them.
///
/// # Example
/// ```
/// use slot_planner::conflict::{rules, ConflictOracle};
///
/// let oracle = ConflictOracle::new()
///     .with_rule(rules::SameRound)
///     .with_rule(rules::SameGame);
/// assert_eq!(oracle.rule_names(), vec!["SAME_ROUND", "SAME_GAME"]);
/// ```
#[derive(Clone)]
pub struct ConflictOracle {
    rules: Vec<Arc<dyn ConflictRule>>,
}

impl ConflictOracle {
    /// Creates an oracle with no rules (nothing conflicts).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Identity, game, then player-overlap rules.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(rules::SameRound)
            .with_rule(rules::SameGame)
            .with_rule(rules::SharedPlayer)
    }

    /// Appends a rule.
    pub fn with_rule<R: ConflictRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Whether `a` and `b` may not share a slot.
    pub fn conflicts(&self, a: &Round, b: &Round) -> bool {
        self.first_conflict(a, b).is_some()
    }

    /// Name of the first rule that fires, if any.
    pub fn first_conflict(&self, a: &Round, b: &Round) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| rule.conflicts(a, b))
            .map(|rule| rule.name())
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Number of rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for ConflictOracle {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for ConflictOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConflictOracle")
            .field("rules", &self.rule_names())
            .finish()
    }
}
