//! Conflict-aware slot planning.
//!
//! Pairs rounds (units of work on a game, played by a set of players)
//! into shared one-hour slots so that no slot holds two rounds on the same
//! game or with a common player, while trying to stay under a slot
//! ceiling.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Round`, `Game`, `Slot`, `SlotWindow`, `Schedule`
//! - **`conflict`**: Ordered conflict rules and the `ConflictOracle`
//! - **`scheduler`**: `SlotPacker` (greedy first-fit), `SlotSolver`
//!   (rotation search + time stamping), `ScheduleKpi`
//! - **`validation`**: Input integrity checks (empty IDs, blank players)
//! - **`config`**: `planner.toml` parsing and ceiling policy
//! - **`warehouse`**: Post-planning load steps and the sink interface
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use slot_planner::models::{Game, Round};
//! use slot_planner::scheduler::SlotSolver;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 3, 1)
//!     .unwrap()
//!     .and_hms_opt(20, 0, 0)
//!     .unwrap();
//! let rounds = vec![
//!     Round::new("A", Game::new("roulette")).with_player("u1"),
//!     Round::new("B", Game::new("poker")).with_player("u1"),
//!     Round::new("C", Game::new("slots")).with_player("u2"),
//! ];
//!
//! let schedule = SlotSolver::new().solve(&rounds, 2, start).unwrap();
//! assert!(schedule.met_ceiling);
//! assert_eq!(schedule.slot_count(), 2);
//! ```
//!
//! # Limits
//!
//! The solver is a heuristic: it probes n orderings with an O(n²) pass
//! each. Treat `max_slots` as a target and check `Schedule::met_ceiling`,
//! or use `SlotSolver::solve_strict` to turn a miss into an error.

pub mod config;
pub mod conflict;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod warehouse;

pub use error::{PlannerError, PlannerResult, SinkError};
