//! Input validation for planning runs.
//!
//! Checks the structural integrity of rounds before packing, so that a
//! malformed round fails fast at the solver boundary instead of
//! producing a silently wrong pairing. Detects:
//! - Empty round IDs
//! - Empty game IDs
//! - Blank player IDs
//!
//! Duplicate round IDs are *not* an error: the packer treats every list
//! position as its own round. [`duplicate_round_ids`] reports them so the
//! caller can decide.

use crate::models::Round;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A round has an empty identifier.
    MissingId,
    /// A round's game has an empty identifier.
    MissingGame,
    /// A player identifier is empty or whitespace.
    BlankPlayer,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the rounds of a planning run.
///
/// Checks:
/// 1. Every round has a non-empty ID
/// 2. Every round's game has a non-empty ID
/// 3. No player ID is blank
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_rounds(rounds: &[Round]) -> ValidationResult {
    let mut errors = Vec::new();

    for (pos, round) in rounds.iter().enumerate() {
        if round.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingId,
                format!("Round at position {pos} has an empty ID"),
            ));
        }

        if round.game_id().trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingGame,
                format!("Round '{}' (position {pos}) has no game ID", round.id),
            ));
        }

        if round.players.iter().any(|p| p.trim().is_empty()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankPlayer,
                format!("Round '{}' (position {pos}) has a blank player ID", round.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Round IDs that occur more than once, in first-repeat order.
pub fn duplicate_round_ids(rounds: &[Round]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut dups = Vec::new();

    for round in rounds {
        let id = round.id.as_str();
        if !seen.insert(id) && reported.insert(id) {
            dups.push(id);
        }
    }

    dups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Game;

    fn sample_rounds() -> Vec<Round> {
        vec![
            Round::new("R1", Game::new("G1")).with_players(["u1", "u2"]),
            Round::new("R2", Game::new("G2")).with_player("u3"),
            Round::new("R3", Game::new("G1")),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_rounds(&sample_rounds()).is_ok());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(validate_rounds(&[]).is_ok());
    }

    #[test]
    fn test_missing_id() {
        let rounds = vec![Round::new("  ", Game::new("G1"))];
        let errors = validate_rounds(&rounds).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingId));
    }

    #[test]
    fn test_missing_game() {
        let rounds = vec![Round::new("R1", Game::new(""))];
        let errors = validate_rounds(&rounds).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingGame && e.message.contains("R1")));
    }

    #[test]
    fn test_blank_player() {
        let rounds = vec![Round::new("R1", Game::new("G1")).with_players(["u1", ""])];
        let errors = validate_rounds(&rounds).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::BlankPlayer);
    }

    #[test]
    fn test_multiple_errors() {
        let rounds = vec![
            Round::new("", Game::new("G1")),
            Round::new("R2", Game::new("")).with_player(" "),
        ];
        let errors = validate_rounds(&rounds).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_duplicates_are_reported_once() {
        let mut rounds = sample_rounds();
        rounds.push(Round::new("R1", Game::new("G3")));
        rounds.push(Round::new("R1", Game::new("G4")));
        rounds.push(Round::new("R2", Game::new("G5")));

        assert!(validate_rounds(&rounds).is_ok());
        assert_eq!(duplicate_round_ids(&rounds), vec!["R1", "R2"]);
        assert!(duplicate_round_ids(&sample_rounds()).is_empty());
    }
}
