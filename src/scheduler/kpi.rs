//! Schedule quality metrics (KPIs).
//!
//! Computes pairing indicators from a solved schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Slot count | Number of slots used |
//! | Pairing rate | Fraction of rounds sharing a slot with a partner |
//! | Lower bound | ceil(rounds / 2), the best any packing can do |
//! | Overshoot | Slots beyond the ceiling |
//! | Span | First slot start to last slot end |

use chrono::TimeDelta;

use crate::models::Schedule;

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Slots used.
    pub slot_count: usize,
    /// Rounds placed.
    pub round_count: usize,
    /// Slots holding two rounds.
    pub paired_slots: usize,
    /// Slots holding one round.
    pub single_slots: usize,
    /// Fraction of rounds that have a partner (0.0..1.0).
    pub pairing_rate: f64,
    /// Fewest slots any packing could use: ceil(rounds / 2).
    pub lower_bound: usize,
    /// Slots beyond the ceiling.
    pub overshoot: usize,
    /// Wall-clock span covered by the slots.
    pub span: TimeDelta,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let slot_count = schedule.slot_count();
        let round_count = schedule.round_count();
        let paired_slots = schedule.paired_count();

        let pairing_rate = if round_count == 0 {
            0.0
        } else {
            (paired_slots * 2) as f64 / round_count as f64
        };

        let span = match (schedule.starts_at(), schedule.ends_at()) {
            (Some(start), Some(end)) => end - start,
            _ => TimeDelta::zero(),
        };

        Self {
            slot_count,
            round_count,
            paired_slots,
            single_slots: slot_count - paired_slots,
            pairing_rate,
            lower_bound: round_count.div_ceil(2),
            overshoot: schedule.overshoot(),
            span,
        }
    }

    /// Slots above the theoretical lower bound.
    pub fn gap_to_lower_bound(&self) -> usize {
        self.slot_count.saturating_sub(self.lower_bound)
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_overshoot: usize, min_pairing_rate: f64) -> bool {
        self.overshoot <= max_overshoot && self.pairing_rate >= min_pairing_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Game, Round};
    use crate::scheduler::SlotSolver;
    use chrono::{NaiveDate, NaiveDateTime};

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn round(id: &str, game: &str, players: &[&str]) -> Round {
        Round::new(id, Game::new(game)).with_players(players.iter().copied())
    }

    #[test]
    fn test_kpi_all_paired() {
        let rounds = vec![
            round("A", "G1", &["u1"]),
            round("B", "G2", &["u2"]),
            round("C", "G3", &["u3"]),
            round("D", "G4", &["u4"]),
        ];
        let schedule = SlotSolver::new().solve(&rounds, 2, start()).unwrap();
        let kpi = ScheduleKpi::calculate(&schedule);

        assert_eq!(kpi.slot_count, 2);
        assert_eq!(kpi.paired_slots, 2);
        assert_eq!(kpi.single_slots, 0);
        assert!((kpi.pairing_rate - 1.0).abs() < 1e-10);
        assert_eq!(kpi.lower_bound, 2);
        assert_eq!(kpi.gap_to_lower_bound(), 0);
        assert_eq!(kpi.span, TimeDelta::hours(2));
    }

    #[test]
    fn test_kpi_shared_game() {
        let rounds = vec![
            round("A", "G1", &[]),
            round("B", "G1", &[]),
            round("C", "G1", &[]),
        ];
        let schedule = SlotSolver::new().solve(&rounds, 1, start()).unwrap();
        let kpi = ScheduleKpi::calculate(&schedule);

        assert_eq!(kpi.slot_count, 3);
        assert_eq!(kpi.single_slots, 3);
        assert!((kpi.pairing_rate - 0.0).abs() < 1e-10);
        assert_eq!(kpi.lower_bound, 2);
        assert_eq!(kpi.gap_to_lower_bound(), 1);
        assert_eq!(kpi.overshoot, 2);
    }

    #[test]
    fn test_kpi_partial_pairing() {
        let rounds = vec![
            round("A", "G1", &["u1"]),
            round("B", "G2", &["u1"]),
            round("C", "G3", &["u2"]),
        ];
        let schedule = SlotSolver::new().solve(&rounds, 2, start()).unwrap();
        let kpi = ScheduleKpi::calculate(&schedule);

        // A+C paired, B alone: 2 of 3 rounds have partners
        assert!((kpi.pairing_rate - 2.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.overshoot, 0);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Schedule::new());
        assert_eq!(kpi.slot_count, 0);
        assert_eq!(kpi.lower_bound, 0);
        assert_eq!(kpi.span, TimeDelta::zero());
        assert!((kpi.pairing_rate - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let rounds = vec![round("A", "G1", &[]), round("B", "G1", &[])];
        let schedule = SlotSolver::new().solve(&rounds, 1, start()).unwrap();
        let kpi = ScheduleKpi::calculate(&schedule);

        assert!(kpi.meets_thresholds(1, 0.0));
        assert!(!kpi.meets_thresholds(0, 0.0));
        assert!(!kpi.meets_thresholds(1, 0.5));
    }
}
